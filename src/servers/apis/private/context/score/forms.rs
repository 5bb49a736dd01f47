use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct ScoreQuery {
    pub tablename: String,
    pub username: String,
}

#[derive(Deserialize, Debug)]
pub struct LeaderboardQuery {
    pub tablename: String,
}

#[derive(Deserialize, Debug)]
pub struct UpdateScoreForm {
    pub table_name: String,
    pub username: String,
    pub score: i64,
}
