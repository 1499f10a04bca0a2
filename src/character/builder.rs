pub mod character_builder;
