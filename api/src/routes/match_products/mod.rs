pub mod match_products_request;
pub mod match_products_response;
pub mod match_products_route;
