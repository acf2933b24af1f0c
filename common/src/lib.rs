pub mod demo_analysis;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatchInfo {
    pub id: String,
    pub map: String,
    pub host: String,
    pub tickrate: u8,
    pub server_tickrate: u8,
}
