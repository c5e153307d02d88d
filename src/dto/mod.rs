pub mod customers;
pub mod employees;
pub mod orders;
pub mod products;
pub mod suppliers;
