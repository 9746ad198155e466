//! Column of derived values with an explicit definedness contract.

/// Values aligned with the rows of a price series.
///
/// `None` marks an undefined value. `first_defined` is the earliest row at
/// which the computation can produce a value at all (derived from window
/// sizes), every row before it is `None`. Rows at or after it may still be
/// `None` when the input is degenerate.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedColumn {
    values: Vec<Option<f64>>,
    first_defined: usize,
}

impl DerivedColumn {
    /// Builds a column, clearing anything before `first_defined`.
    pub fn new(mut values: Vec<Option<f64>>, first_defined: usize) -> Self {
        let cut = first_defined.min(values.len());
        values[..cut].fill(None);
        Self {
            values,
            first_defined,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn first_defined(&self) -> usize {
        self.first_defined
    }

    pub fn get(&self, row: usize) -> Option<f64> {
        self.values.get(row).copied().flatten()
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Number of rows holding a value.
    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_before_first_defined_is_cleared() {
        let col = DerivedColumn::new(vec![Some(1.0), Some(2.0), Some(3.0)], 2);
        assert_eq!(col.values(), &[None, None, Some(3.0)]);
        assert_eq!(col.get(2), Some(3.0));
        assert_eq!(col.get(7), None);
        assert_eq!(col.defined_count(), 1);
    }

    #[test]
    fn first_defined_past_end_is_allowed() {
        let col = DerivedColumn::new(vec![Some(1.0)], 20);
        assert_eq!(col.values(), &[None]);
        assert_eq!(col.first_defined(), 20);
    }
}
