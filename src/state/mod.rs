mod form;

pub use form::CalculatorForm;
