//! Core abstraction traits for matrix elements

pub mod element;

pub use element::Element;
