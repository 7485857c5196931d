mod style;

pub use style::{to_camel_case, to_kebab_case, CssStyle};
