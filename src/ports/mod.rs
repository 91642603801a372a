/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the infrastructure interfaces the
/// application core talks to: report reading, project lookup, provenance
/// queries, progress reporting, rendering and output.
pub mod outbound;
