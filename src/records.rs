use std::fmt::{self, Display};

fn bits_to_string(inputs: &[bool]) -> String {
    let bits = inputs
        .iter()
        .map(|&x| (x as u8).to_string())
        .collect::<Vec<String>>()
        .join(", ");

    format!("[{}]", bits)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub inputs: Vec<bool>,
    pub value: bool,
}

impl TableEntry {
    pub fn new(inputs: Vec<bool>, value: bool) -> Self {
        Self { inputs, value }
    }
}

impl Display for TableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", bits_to_string(&self.inputs), self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence {
    pub inputs: Vec<bool>,
    pub value_1: bool,
    pub value_2: bool,
}

impl Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} vs {}",
            bits_to_string(&self.inputs),
            self.value_1,
            self.value_2
        )
    }
}
