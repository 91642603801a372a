/// Child-process adapters
mod dotnet_provenance_provider;

pub use dotnet_provenance_provider::DotnetProvenanceProvider;
