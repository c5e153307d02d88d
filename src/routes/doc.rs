use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        customers::CustomerRequest,
        employees::EmployeeRequest,
        orders::{OrderItemRequest, OrderRequest},
        products::ProductRequest,
        suppliers::SupplierRequest,
    },
    error::ErrorResponse,
    models::{Customer, Employee, Order, OrderItem, OrderStatus, Product, Supplier},
    routes::{customers, employees, health, orders, products, suppliers},
    validation::Violation,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        customers::create_customer,
        customers::list_customers,
        customers::get_customer,
        customers::update_customer,
        customers::delete_customer,
        employees::create_employee,
        employees::list_employees,
        employees::get_employee,
        employees::update_employee,
        employees::delete_employee,
        suppliers::create_supplier,
        suppliers::list_suppliers,
        suppliers::get_supplier,
        suppliers::update_supplier,
        suppliers::delete_supplier,
        products::create_product,
        products::list_products,
        products::get_product,
        products::update_product,
        products::delete_product,
        orders::create_order,
        orders::list_orders,
        orders::get_order,
        orders::list_orders_by_customer,
        orders::cancel_order,
    ),
    components(
        schemas(
            Customer,
            Employee,
            Supplier,
            Product,
            Order,
            OrderItem,
            OrderStatus,
            CustomerRequest,
            EmployeeRequest,
            SupplierRequest,
            ProductRequest,
            OrderRequest,
            OrderItemRequest,
            ErrorResponse,
            Violation,
            health::HealthData,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Customers", description = "Customer endpoints"),
        (name = "Employees", description = "Employee endpoints"),
        (name = "Suppliers", description = "Supplier endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Orders", description = "Order endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
