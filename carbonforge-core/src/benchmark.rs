use crate::{error::FootprintError, factors, model::round_tonnes};
use carbonforge_schemas::{
    factors::{Country, EmissionFactorTable},
    results::CategoryResult,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkComparison {
    pub country: Country,
    pub benchmark_t: f64,
    pub total_t: f64,
    /// `total_t - benchmark_t`
    pub delta_t: f64,
}

impl BenchmarkComparison {
    pub fn is_above_benchmark(&self) -> bool {
        self.delta_t > 0.0
    }
}

/// Compares a result's total against the per-capita benchmark for `country`.
pub fn compare_to_benchmark(
    result: &CategoryResult,
    country: Country,
    table: &EmissionFactorTable,
) -> Result<BenchmarkComparison, FootprintError> {
    let benchmark_t = factors::per_capita_benchmark(table, country)?;
    Ok(BenchmarkComparison {
        country,
        benchmark_t,
        total_t: result.total,
        delta_t: round_tonnes(result.total - benchmark_t),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn above_india_average() {
        let result = CategoryResult {
            total: 4.89,
            ..Default::default()
        };
        let cmp = compare_to_benchmark(&result, Country::India, &EmissionFactorTable::reference()).unwrap();
        assert_eq!(cmp.benchmark_t, 2.0);
        assert!((cmp.delta_t - 2.89).abs() < 1e-9);
        assert!(cmp.is_above_benchmark());
    }

    #[test]
    fn missing_benchmark_is_an_error() {
        let mut table = EmissionFactorTable::reference();
        table.per_capita_benchmark.clear();
        assert!(compare_to_benchmark(&CategoryResult::default(), Country::India, &table).is_err());
    }
}
