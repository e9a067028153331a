use metrics::counter;

/// Counters for identity and reward events
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "aw_server" }
    }

    pub fn sign_up(&self) {
        counter!(format!("{}_signups_total", self.prefix)).increment(1);
    }

    pub fn sign_in(&self, success: bool) {
        let outcome = if success { "success" } else { "failure" };
        counter!(format!("{}_signins_total", self.prefix), "outcome" => outcome).increment(1);
    }

    /// Record an applied credit and the points it added
    pub fn credit_applied(&self, points: i64) {
        counter!(format!("{}_credits_applied_total", self.prefix)).increment(1);
        counter!(format!("{}_points_credited_total", self.prefix))
            .increment(u64::try_from(points).unwrap_or(0));
    }

    pub fn credit_rejected(&self, reason: &'static str) {
        counter!(format!("{}_credits_rejected_total", self.prefix), "reason" => reason)
            .increment(1);
    }

    pub fn ticket_issued(&self) {
        counter!(format!("{}_tickets_issued_total", self.prefix)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
