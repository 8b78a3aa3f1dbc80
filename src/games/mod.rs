pub mod mystery;
