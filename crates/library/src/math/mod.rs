pub mod casting;
pub mod ceil_div;
pub mod rpow;
pub mod safe_math;
pub mod u256;
