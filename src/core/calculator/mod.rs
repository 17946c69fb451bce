pub mod accrual;
pub mod compensation;
