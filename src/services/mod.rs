pub mod customer_service;
pub mod employee_service;
pub mod order_service;
pub mod product_service;
pub mod supplier_service;
