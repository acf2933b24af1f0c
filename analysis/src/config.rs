/// How the kill/death ratio behaves for a player that never died.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DeathlessRatio {
    /// Report the kill count itself
    #[default]
    Kills,
    /// Plain float division, yielding infinity (or NaN for 0/0)
    Divide,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Divisor for the average damage per round. This is a fixed normalization
    /// and intentionally ignores how many rounds were actually played.
    pub adr_divisor: f64,
    pub deathless_ratio: DeathlessRatio,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            adr_divisor: 30.0,
            deathless_ratio: DeathlessRatio::Kills,
        }
    }
}
