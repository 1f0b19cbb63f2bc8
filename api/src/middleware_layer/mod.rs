pub mod envelope_mapper;
