pub mod customers;
pub mod employees;
pub mod order_items;
pub mod orders;
pub mod products;
pub mod suppliers;

pub use customers::Entity as Customers;
pub use employees::Entity as Employees;
pub use order_items::Entity as OrderItems;
pub use orders::Entity as Orders;
pub use products::Entity as Products;
pub use suppliers::Entity as Suppliers;
