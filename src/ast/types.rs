use std::fmt::Display;

/// Expression Types
///
/// The static type of an expression as inferred by the checker. `Undefined`
/// marks an expression whose type could not be determined; a diagnostic has
/// already been reported for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionType {
    Color,
    Pixel,
    Percentage,
    Scalar,
    Bool,
    Undefined,
}

impl Display for ExpressionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpressionType::Color => write!(f, "color"),
            ExpressionType::Pixel => write!(f, "pixel"),
            ExpressionType::Percentage => write!(f, "percentage"),
            ExpressionType::Scalar => write!(f, "scalar"),
            ExpressionType::Bool => write!(f, "boolean"),
            ExpressionType::Undefined => write!(f, "undefined"),
        }
    }
}
