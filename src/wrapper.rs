use std::collections::HashMap;

use pyo3::{exceptions::PyValueError, prelude::*, wrap_pyfunction};

use crate::{
    config::{Grouping, MiningConfig},
    error::MiningError,
    types::{FrequentItemsets, Record, Support},
};

type PyItemName = String;
type PyItemCounts = HashMap<PyItemName, Support>;
type PyPairCounts = HashMap<(PyItemName, PyItemName), Support>;

impl From<MiningError> for PyErr {
    fn from(err: MiningError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[pymodule]
fn market_basket(_: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(frequent_itemsets, m)?)?;
    Ok(())
}

/// Frequent items and pairs from (product, user) records.
#[pyfunction]
#[pyo3(
    text_signature = "(records, by, min_support_items, min_support_pairs, /, parallel=False)"
)]
fn frequent_itemsets(
    py: Python,
    records: Vec<(PyItemName, PyItemName)>,
    by: &str,
    min_support_items: i64,
    min_support_pairs: i64,
    parallel: Option<bool>,
) -> PyResult<(PyItemCounts, PyPairCounts)> {
    let grouping: Grouping = by.parse()?;
    let config = MiningConfig::new(grouping, min_support_items, min_support_pairs)?
        .with_parallel(parallel.unwrap_or(false));
    let records: Vec<Record<PyItemName>> = records.into_iter().map(Record::from).collect();

    let FrequentItemsets { items, pairs } =
        py.allow_threads(|| crate::frequent_itemsets(&records, &config));

    Ok((items, pairs))
}
