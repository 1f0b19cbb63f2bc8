pub mod stylist_request;
pub mod stylist_response;
pub mod stylist_route;
