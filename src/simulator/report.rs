//! Simulation report generation.

use serde::Serialize;

/// Final state of one simulated playthrough.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub final_depth: u32,
    pub blocks_mined: u64,
    pub money_earned: f64,
    pub final_money: f64,
    pub final_shards: u64,
    pub heroes_collected: usize,
    pub gacha_pulls: u64,
    pub highest_dungeon_floor: u32,
    pub miner_count: u32,
    pub click_power: u32,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub simulated_seconds: f64,

    pub avg_final_depth: f64,
    pub max_final_depth: u32,
    pub avg_blocks_mined: f64,
    pub avg_money_earned: f64,
    pub avg_final_money: f64,
    pub avg_final_shards: f64,
    pub avg_heroes_collected: f64,
    pub avg_gacha_pulls: f64,
    pub avg_highest_floor: f64,
    pub max_highest_floor: u32,

    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, simulated_seconds: f64) -> Self {
        let num_runs = runs.len() as u32;
        let n = (num_runs as f64).max(1.0);

        Self {
            num_runs,
            simulated_seconds,
            avg_final_depth: runs.iter().map(|r| r.final_depth as f64).sum::<f64>() / n,
            max_final_depth: runs.iter().map(|r| r.final_depth).max().unwrap_or(0),
            avg_blocks_mined: runs.iter().map(|r| r.blocks_mined as f64).sum::<f64>() / n,
            avg_money_earned: runs.iter().map(|r| r.money_earned).sum::<f64>() / n,
            avg_final_money: runs.iter().map(|r| r.final_money).sum::<f64>() / n,
            avg_final_shards: runs.iter().map(|r| r.final_shards as f64).sum::<f64>() / n,
            avg_heroes_collected: runs.iter().map(|r| r.heroes_collected as f64).sum::<f64>() / n,
            avg_gacha_pulls: runs.iter().map(|r| r.gacha_pulls as f64).sum::<f64>() / n,
            avg_highest_floor: runs
                .iter()
                .map(|r| r.highest_dungeon_floor as f64)
                .sum::<f64>()
                / n,
            max_highest_floor: runs
                .iter()
                .map(|r| r.highest_dungeon_floor)
                .max()
                .unwrap_or(0),
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} of {:.0} simulated seconds each\n\n",
            self.num_runs, self.simulated_seconds
        ));

        report.push_str("── MINING ───────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Final Depth:     {:.1}\n",
            self.avg_final_depth
        ));
        report.push_str(&format!("  Max Final Depth:     {}\n", self.max_final_depth));
        report.push_str(&format!(
            "  Avg Blocks Mined:    {:.0}\n\n",
            self.avg_blocks_mined
        ));

        report.push_str("── ECONOMY ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Money Earned:    {:.0}\n",
            self.avg_money_earned
        ));
        report.push_str(&format!(
            "  Avg Final Money:     {:.0}\n",
            self.avg_final_money
        ));
        report.push_str(&format!(
            "  Avg Final Shards:    {:.1}\n\n",
            self.avg_final_shards
        ));

        report.push_str("── HEROES ───────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Gacha Pulls:     {:.1}\n",
            self.avg_gacha_pulls
        ));
        report.push_str(&format!(
            "  Avg Heroes Owned:    {:.1}\n\n",
            self.avg_heroes_collected
        ));

        report.push_str("── DUNGEON ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Highest Floor:   {:.1}\n",
            self.avg_highest_floor
        ));
        report.push_str(&format!(
            "  Max Highest Floor:   {}\n\n",
            self.max_highest_floor
        ));

        report.push_str("── PACING ASSESSMENT ────────────────────────────────────────────\n");
        let depth_per_minute = self.avg_final_depth / (self.simulated_seconds / 60.0).max(1.0);
        let pacing = if depth_per_minute < 0.05 {
            "STALLED - Players barely scroll the mine"
        } else if depth_per_minute < 1.0 {
            "GOOD - Steady descent"
        } else {
            "FAST - Consider raising block health growth"
        };
        report.push_str(&format!("  Depth/Minute:    {:.2}\n", depth_per_minute));
        report.push_str(&format!("  Pacing Rating:   {}\n", pacing));

        report
    }

    /// Generate a JSON report for downstream tooling.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
