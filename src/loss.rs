use crate::GerminalError;

fn check_len(y: &[f64], p: &[f64]) -> Result<(), GerminalError> {
    if y.len() != p.len() {
        return Err(GerminalError::Configuration(format!(
            "loss over mismatched vectors: target {} vs predicted {}",
            y.len(),
            p.len()
        )));
    }
    Ok(())
}

/// Cross entropy `-sum(y_i * ln(p_i))` between a target distribution and a
/// predicted one.
pub fn crossentropy(y: &[f64], p: &[f64]) -> Result<f64, GerminalError> {
    check_len(y, p)?;
    Ok(-y
        .iter()
        .zip(p.iter())
        .map(|(y, p)| y * p.ln())
        .fold(0., |a, v| a + v))
}

/// Sum of squared errors `sum((y_i - p_i)^2)`.
pub fn mse(y: &[f64], p: &[f64]) -> Result<f64, GerminalError> {
    check_len(y, p)?;
    Ok(y.iter()
        .zip(p.iter())
        .map(|(y, p)| (y - p).powi(2))
        .fold(0., |a, v| a + v))
}
