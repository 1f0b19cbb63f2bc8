pub mod health_route;
pub mod match_products;
pub mod stylist;
pub mod upload_products;
