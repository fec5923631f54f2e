// Domain layer: type abstractions shared by the extension traits.

pub mod numeric;

pub use numeric::Numeric;
