pub mod serialization;

pub use serialization::DealSnapshot;
