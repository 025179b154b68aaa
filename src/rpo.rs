use serde::Deserialize;

/// One VPG as returned by `GET /v1/vpgs`. Only the field we average is
/// decoded; everything else in the object is ignored.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vpg {
    #[serde(rename = "ActualRPO")]
    pub actual_rpo: i64,
}

/// Integer mean of `ActualRPO` over `vpgs`, truncated toward zero.
/// An empty list averages to 0.
pub fn average_rpo(vpgs: &[Vpg]) -> i64 {
    if vpgs.is_empty() {
        return 0;
    }
    // The mean of i64 values always fits back into i64.
    let total: i128 = vpgs.iter().map(|v| i128::from(v.actual_rpo)).sum();
    (total / vpgs.len() as i128) as i64
}
