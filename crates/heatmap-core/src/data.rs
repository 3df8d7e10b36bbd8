// File: crates/heatmap-core/src/data.rs
// Summary: Dataset model: wire format, month normalization, derived ranges.

use serde::Deserialize;

use crate::error::{HeatmapError, HeatmapResult};

/// One monthly observation as supplied by the data source.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct MonthlyRecord {
    pub year: i32,
    /// 1-12 on the wire; 0-11 after `Dataset::from_json`.
    pub month: u32,
    /// Signed deviation from the base temperature, in degrees Celsius.
    pub variance: f64,
}

/// The full dataset: a reference temperature plus ordered monthly records.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<MonthlyRecord>,
}

impl Dataset {
    /// Parse a dataset from its JSON wire form.
    ///
    /// Months are decremented from 1-12 to 0-11 here, in exactly one place.
    /// Rejects an empty record list and out-of-range months.
    pub fn from_json(json: &str) -> HeatmapResult<Self> {
        let mut data: Dataset = serde_json::from_str(json)?;
        data.normalize_months()?;
        Ok(data)
    }

    fn normalize_months(&mut self) -> HeatmapResult<()> {
        if self.monthly_variance.is_empty() {
            return Err(HeatmapError::EmptyDataset);
        }
        for rec in &mut self.monthly_variance {
            if rec.month < 1 || rec.month > 12 {
                return Err(HeatmapError::MonthOutOfRange {
                    year: rec.year,
                    month: rec.month,
                });
            }
            rec.month -= 1;
        }
        Ok(())
    }

    /// Absolute temperature for a record.
    #[inline]
    pub fn absolute_temperature(&self, rec: &MonthlyRecord) -> f64 {
        self.base_temperature + rec.variance
    }

    /// Min/max absolute temperature over all records.
    pub fn temp_range(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for rec in &self.monthly_variance {
            lo = lo.min(rec.variance);
            hi = hi.max(rec.variance);
        }
        if !lo.is_finite() || !hi.is_finite() {
            return (self.base_temperature, self.base_temperature);
        }
        (self.base_temperature + lo, self.base_temperature + hi)
    }

    /// Distinct years in first-occurrence order (ascending in the source data).
    pub fn distinct_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = Vec::new();
        for rec in &self.monthly_variance {
            if !years.contains(&rec.year) {
                years.push(rec.year);
            }
        }
        years
    }

    /// Description heading: first year, last year, and the base temperature.
    pub fn heading(&self) -> String {
        let first = self.monthly_variance.first().map(|r| r.year).unwrap_or_default();
        let last = self.monthly_variance.last().map(|r| r.year).unwrap_or_default();
        format!("{} {} : base temperature {} °C", first, last, self.base_temperature)
    }
}
