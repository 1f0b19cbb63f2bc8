pub mod upload_products_request;
pub mod upload_products_response;
pub mod upload_products_route;
