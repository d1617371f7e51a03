use super::format;
use super::operations;
use crate::errors::Result;

/// The closed set of calculations the calculator knows how to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Kind {
    /// Returns the tag identifying the calculation in rendered output,
    /// for example "AddCalculation"
    pub fn tag(&self) -> &'static str {
        match self {
            Kind::Add => "AddCalculation",
            Kind::Subtract => "SubtractCalculation",
            Kind::Multiply => "MultiplyCalculation",
            Kind::Divide => "DivideCalculation",
        }
    }

    /// Returns the tag with its "Calculation" suffix removed
    pub fn word(&self) -> &'static str {
        let tag = self.tag();
        tag.strip_suffix("Calculation").unwrap_or(tag)
    }
}

/// A calculation bound to its two operands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    kind: Kind,
    a: f64,
    b: f64,
}

impl Calculation {
    /// Returns a new calculation of the given kind
    pub fn new(kind: Kind, a: f64, b: f64) -> Calculation {
        Calculation { kind, a, b }
    }

    /// Returns the kind of calculation
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the operand pair
    pub fn operands(&self) -> (f64, f64) {
        (self.a, self.b)
    }

    /// Performs the calculation
    pub fn execute(&self) -> Result<f64> {
        match self.kind {
            Kind::Add => operations::addition(self.a, self.b),
            Kind::Subtract => operations::subtraction(self.a, self.b),
            Kind::Multiply => operations::multiplication(self.a, self.b),
            Kind::Divide => operations::division(self.a, self.b),
        }
    }

    /// Performs the calculation and describes it along with its result, for
    /// example "AddCalculation: 10.0 Add 5.0 = 15.0"
    pub fn render(&self) -> Result<String> {
        let result = self.execute()?;

        Ok(format!(
            "{}: {} {} {} = {}",
            self.kind.tag(),
            format::number(self.a),
            self.kind.word(),
            format::number(self.b),
            format::number(result)
        ))
    }

    /// Describes the calculation without performing it
    pub fn describe(&self) -> String {
        format!(
            "{}(a={}, b={})",
            self.kind.tag(),
            format::number(self.a),
            format::number(self.b)
        )
    }
}
