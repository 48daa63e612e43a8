//! Detection dispatcher and player registry
//!
//! [`MovementWarden`] is the entry point the host calls once per movement
//! packet, on the world update thread. Dispatch is a bounded, synchronous
//! computation: short-circuit checks, the heuristic battery in a fixed order,
//! report aggregation, then an unconditional commit of the sample as the new
//! comparison baseline.
//!
//! Configuration is held as an immutable snapshot swapped atomically on
//! reload, so a reload never tears a dispatch in half.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tracing::{debug, error, info, warn};

use crate::checks::{self, Violation};
use crate::config::{AnticheatConfig, MovementData, WardenConfig};
use crate::constants::{AUTO_BAN_AUTHOR, AUTO_BAN_REASON, CLEANUP_INTERVAL_SECS};
use crate::enforcement::{BanRequest, Enforcement, Notice};
use crate::movement::{MoveOpcode, MovementSample};
use crate::report::ReportSummary;
use crate::state::PlayerMovementState;
use crate::world::{AccountTier, LiquidStatus, WorldView};

/// Stable player identity assigned by the host server.
pub type PlayerGuid = u64;

/// The anti-cheat engine: one per world instance.
pub struct MovementWarden {
    config: RwLock<Arc<AnticheatConfig>>,
    data: RwLock<Arc<MovementData>>,
    players: DashMap<PlayerGuid, PlayerMovementState>,
}

impl MovementWarden {
    pub fn new(config: WardenConfig) -> Self {
        Self::from_parts(config.anticheat, config.data)
    }

    pub fn from_parts(anticheat: AnticheatConfig, data: MovementData) -> Self {
        Self {
            config: RwLock::new(Arc::new(anticheat)),
            data: RwLock::new(Arc::new(data)),
            players: DashMap::new(),
        }
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> Arc<AnticheatConfig> {
        self.config.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Current data-table snapshot.
    pub fn data(&self) -> Arc<MovementData> {
        self.data.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Swap in a freshly loaded configuration. In-flight dispatches keep the
    /// snapshot they started with.
    pub fn reload(&self, config: WardenConfig) {
        *self.config.write().unwrap_or_else(PoisonError::into_inner) =
            Arc::new(config.anticheat);
        *self.data.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(config.data);
        info!("anti-cheat configuration reloaded");
    }

    /// Start tracking a player at login. Tracking the same guid twice is a
    /// login/logout sequencing bug upstream.
    pub fn register_player(&self, guid: PlayerGuid) {
        let prior = self.players.insert(guid, PlayerMovementState::new());
        if prior.is_some() {
            error!("movement state for {} already existed at login", guid);
            debug_assert!(false, "movement state registered twice");
        }
        debug!("tracking movement for {}", guid);
    }

    /// Stop tracking a player at logout.
    pub fn remove_player(&self, guid: PlayerGuid) {
        self.players.remove(&guid);
        debug!("dropped movement tracking for {}", guid);
    }

    pub fn tracked_players(&self) -> usize {
        self.players.len()
    }

    /// The last committed sample and opcode, if the player is tracked and has
    /// moved at least once.
    pub fn last_movement(&self, guid: PlayerGuid) -> Option<(MovementSample, MoveOpcode)> {
        let state = self.players.get(&guid)?;
        state.last_sample().map(|s| (*s, state.last_opcode()))
    }

    /// Run the full detection pass for one movement packet.
    pub fn dispatch(
        &self,
        guid: PlayerGuid,
        world: &dyn WorldView,
        enforcement: &dyn Enforcement,
        sample: MovementSample,
        opcode: MoveOpcode,
    ) {
        let cfg = self.config();
        if !cfg.enabled {
            return;
        }
        if world.is_gamemaster() && !cfg.check_gamemasters {
            return;
        }
        if world.account_tier() != AccountTier::Player && !cfg.check_gamemasters {
            return;
        }

        let Some(mut state) = self.players.get_mut(&guid) else {
            // Not tracked (already logging out, or never logged in): no-op.
            return;
        };

        // Flight paths, transports and vehicles move the player on
        // server-authoritative paths; no client position is trustworthy for
        // any heuristic. Keeping the baseline current also stops stale
        // comparisons from firing once control returns to the client.
        if world.in_flight_path() || world.on_transport() || world.on_vehicle() {
            state.commit(sample, opcode);
            return;
        }

        let data = self.data();
        let d = &cfg.detections;
        let mut violations: Vec<Violation> = Vec::new();
        let mut forced: Option<Violation> = None;

        {
            let prev = state.previous();
            let mut hit = |v: Option<Violation>| {
                if let Some(v) = v {
                    violations.push(v);
                }
            };

            if d.speed {
                hit(checks::speed::check(&sample, prev, world, &data));
            }
            if d.fly {
                hit(checks::fly::check(&sample, prev, world, d.stricter_fly));
            }
            if d.jump {
                hit(checks::jump::check(&sample, opcode, prev, world, d.stricter_jump));
            }
            if d.teleport_plane {
                hit(checks::plane::check(&sample, opcode, prev, world, &data));
            }
            if d.climb {
                hit(checks::climb::check(&sample, opcode, prev, world));
            }
            if d.teleport {
                hit(checks::teleport::check(guid, &sample, prev, world, enforcement));
            }
            if d.ignore_control {
                hit(checks::control::ignore_control(&sample, opcode, prev, world));
            }
            if d.gravity {
                hit(checks::control::gravity(&sample, prev, world));
            }
            if world.liquid_status() == LiquidStatus::WaterWalk {
                if d.water_walk {
                    hit(checks::water::walk_on_water(&sample, prev, world));
                }
            } else if d.zaxis {
                hit(checks::water::zaxis(&sample, prev, world, &data));
            }
            if d.anti_swim {
                hit(checks::water::anti_swim(&sample, opcode, prev, world, &data));
            }
            if d.anti_knockback {
                hit(checks::control::anti_knockback(&sample, prev, world));
            }
            if d.no_fall_damage {
                hit(checks::fall::check(&sample, prev, world, cfg.fall_damage_rate));
            }
            if d.battleground_start {
                forced = checks::battleground::check(&sample, opcode, prev, world, &data);
            }
        }

        state.commit(sample, opcode);

        // (total after counting, forced announcement) per counted report.
        let mut counted: Vec<(u64, bool)> = Vec::new();
        for violation in violations.iter().chain(forced.iter()) {
            warn!(
                "{} movement violation by {}: {}",
                violation.detection.label(),
                world.player_name(),
                violation.reason
            );
        }
        for violation in violations {
            if state.reports.register(violation.detection, &cfg.burst) {
                counted.push((state.reports.total(), false));
            }
        }
        if let Some(violation) = forced {
            if state.reports.register(violation.detection, &cfg.burst) {
                counted.push((state.reports.total(), true));
            }
        }
        drop(state);

        for (total, force_warn) in counted {
            self.apply_thresholds(guid, world.player_name(), total, &cfg, enforcement, force_warn);
        }
    }

    /// Evaluate every countermeasure independently against the new total.
    /// Crossing several thresholds in one report triggers all of them.
    fn apply_thresholds(
        &self,
        guid: PlayerGuid,
        name: &str,
        total: u64,
        cfg: &AnticheatConfig,
        enforcement: &dyn Enforcement,
        force_warn: bool,
    ) {
        let thresholds = &cfg.thresholds;
        let penalties = &cfg.penalties;

        if (penalties.warn_enabled || force_warn) && total >= u64::from(thresholds.warning) {
            enforcement.notify(Notice::CheatWarning { player: name.to_string(), reports: total });
        }

        if penalties.kick_enabled && total >= u64::from(thresholds.kick) {
            info!("kicking {} after {} movement reports", name, total);
            enforcement.kick(guid);
            if penalties.announce_kick {
                enforcement.notify(Notice::KickAnnounce { player: name.to_string() });
            }
        }

        if penalties.ban_enabled && total >= u64::from(thresholds.ban) {
            info!("banning {} after {} movement reports", name, total);
            enforcement.ban(
                guid,
                BanRequest { duration_secs: 0, reason: AUTO_BAN_REASON, author: AUTO_BAN_AUTHOR },
            );
            if penalties.announce_ban {
                enforcement.notify(Notice::BanAnnounce { player: name.to_string() });
            }
        }

        if penalties.jail_enabled && total >= u64::from(thresholds.jail) {
            info!("jailing {} after {} movement reports", name, total);
            enforcement.jail(guid, &cfg.jail);
            if penalties.announce_jail {
                enforcement.notify(Notice::JailAnnounce { player: name.to_string() });
            }
        }
    }

    /// Reset accumulated reports for one player, or for everyone currently
    /// tracked. Tracking itself continues uninterrupted.
    pub fn clear_reports(&self, guid: Option<PlayerGuid>) {
        match guid {
            Some(guid) => {
                if let Some(mut state) = self.players.get_mut(&guid) {
                    state.reports.clear();
                    info!("cleared movement reports for {}", guid);
                }
            }
            None => {
                for mut entry in self.players.iter_mut() {
                    entry.reports.clear();
                }
                info!("cleared movement reports for all tracked players");
            }
        }
    }

    /// Counter snapshot for the operator command surface.
    pub fn report_summary(&self, guid: PlayerGuid) -> Option<ReportSummary> {
        self.players.get(&guid).map(|state| state.reports.summary())
    }

    /// Periodic housekeeping: expire burst windows that ran out. Optional —
    /// stale bursts also self-correct the next time their type fires.
    pub fn cleanup(&self) {
        let burst = self.config().burst.clone();
        let now = Instant::now();
        let mut expired = 0usize;
        for mut entry in self.players.iter_mut() {
            expired += entry.reports.expire_stale_bursts(&burst, now);
        }
        debug!(
            "anti-cheat housekeeping: {} tracked players, {} stale bursts expired",
            self.players.len(),
            expired
        );
    }
}

/// Spawn the periodic housekeeping task.
pub fn spawn_housekeeping(warden: Arc<MovementWarden>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(CLEANUP_INTERVAL_SECS));
        loop {
            interval.tick().await;
            warden.cleanup();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Thresholds;
    use crate::enforcement::recording::{Action, RecordingSink};
    use crate::testutil::{init_test_logging, sample_at, sample_at_ms, MockWorld};
    use crate::world::{BattlegroundState, BattlegroundStatus, Team};

    fn warden() -> MovementWarden {
        MovementWarden::from_parts(AnticheatConfig::default(), MovementData::default())
    }

    /// Config with every penalty off so dispatch tests observe counters only.
    fn quiet_config() -> AnticheatConfig {
        let mut cfg = AnticheatConfig::default();
        cfg.penalties.warn_enabled = false;
        cfg
    }

    fn dispatch_heartbeat(warden: &MovementWarden, world: &MockWorld, sample: MovementSample) {
        let sink = RecordingSink::default();
        warden.dispatch(1, world, &sink, sample, MoveOpcode::Heartbeat);
    }

    /// Jump packet with gravity visibly acting, so only the double-jump
    /// trigger fires.
    fn jump_sample(x: f32, ms: u32) -> MovementSample {
        MovementSample { fall_speed: 3.0, ..sample_at_ms(x, 0.0, 0.0, ms) }
    }

    #[test]
    fn dispatch_for_untracked_player_is_a_noop() {
        let warden = warden();
        let world = MockWorld::default();
        let sink = RecordingSink::default();
        warden.dispatch(99, &world, &sink, sample_at(0.0, 0.0, 0.0), MoveOpcode::Heartbeat);
        assert!(warden.report_summary(99).is_none());
    }

    #[test]
    fn lifecycle_register_dispatch_remove() {
        let warden = warden();
        let world = MockWorld::default();
        warden.register_player(1);
        assert_eq!(warden.tracked_players(), 1);
        dispatch_heartbeat(&warden, &world, sample_at(1.0, 0.0, 0.0));
        assert!(warden.last_movement(1).is_some());
        warden.remove_player(1);
        assert_eq!(warden.tracked_players(), 0);
        assert!(warden.last_movement(1).is_none());
    }

    #[test]
    fn sample_commits_even_when_nothing_fires() {
        let warden = warden();
        let world = MockWorld::default();
        warden.register_player(1);
        let sample = sample_at_ms(3.0, 4.0, 0.0, 700);
        dispatch_heartbeat(&warden, &world, sample);
        let (last, opcode) = warden.last_movement(1).unwrap();
        assert_eq!(last, sample);
        assert_eq!(opcode, MoveOpcode::Heartbeat);
    }

    #[test]
    fn disabled_engine_does_not_even_commit() {
        let mut cfg = quiet_config();
        cfg.enabled = false;
        let warden = MovementWarden::from_parts(cfg, MovementData::default());
        let world = MockWorld::default();
        warden.register_player(1);
        dispatch_heartbeat(&warden, &world, sample_at(1.0, 0.0, 0.0));
        assert!(warden.last_movement(1).is_none());
    }

    #[test]
    fn gamemasters_are_exempt_by_default() {
        let warden = warden();
        let mut world = MockWorld::default();
        world.gamemaster = true;
        warden.register_player(1);
        // A blatant teleport from a GM: ignored.
        dispatch_heartbeat(&warden, &world, sample_at_ms(0.0, 0.0, 0.0, 0));
        dispatch_heartbeat(&warden, &world, sample_at_ms(500.0, 0.0, 0.0, 16));
        assert_eq!(warden.report_summary(1).unwrap().total, 0);
    }

    #[test]
    fn gamemasters_are_checked_when_opted_in() {
        let mut cfg = quiet_config();
        cfg.check_gamemasters = true;
        let warden = MovementWarden::from_parts(cfg, MovementData::default());
        let mut world = MockWorld::default();
        world.gamemaster = true;
        world.tier = AccountTier::GameMaster;
        warden.register_player(1);
        dispatch_heartbeat(&warden, &world, sample_at_ms(0.0, 0.0, 0.0, 0));
        dispatch_heartbeat(&warden, &world, sample_at_ms(500.0, 0.0, 0.0, 16));
        assert!(warden.report_summary(1).unwrap().total > 0);
    }

    #[test]
    fn elevated_accounts_are_exempt_without_opt_in() {
        let warden = warden();
        let mut world = MockWorld::default();
        world.tier = AccountTier::Moderator;
        warden.register_player(1);
        dispatch_heartbeat(&warden, &world, sample_at_ms(0.0, 0.0, 0.0, 0));
        dispatch_heartbeat(&warden, &world, sample_at_ms(500.0, 0.0, 0.0, 16));
        assert_eq!(warden.report_summary(1).unwrap().total, 0);
    }

    #[test]
    fn transport_rides_store_the_sample_without_checking() {
        let warden = warden();
        let mut world = MockWorld::default();
        world.transport = true;
        warden.register_player(1);
        dispatch_heartbeat(&warden, &world, sample_at_ms(0.0, 0.0, 0.0, 0));
        let teleported = sample_at_ms(800.0, 0.0, 0.0, 16);
        dispatch_heartbeat(&warden, &world, teleported);
        assert_eq!(warden.report_summary(1).unwrap().total, 0);
        assert_eq!(warden.last_movement(1).unwrap().0, teleported);
    }

    #[test]
    fn speed_scenario_reports_through_debounce() {
        init_test_logging();
        let warden = MovementWarden::from_parts(quiet_config(), MovementData::default());
        let world = MockWorld::default(); // run cap 7.0
        warden.register_player(1);
        // 30 units per second, repeated: each dispatch is one burst hit, the
        // third inside the window promotes to one counted report.
        dispatch_heartbeat(&warden, &world, sample_at_ms(0.0, 0.0, 0.0, 0));
        for i in 1..=3u32 {
            dispatch_heartbeat(&warden, &world, sample_at_ms(30.0 * i as f32, 0.0, 0.0, 1000 * i));
        }
        let summary = warden.report_summary(1).unwrap();
        assert_eq!(summary.total, 1);
        assert_eq!(
            summary.by_type.iter().find(|(d, _)| *d == checks::DetectionType::Speed).unwrap().1,
            1
        );
    }

    #[test]
    fn jail_threshold_fires_exactly_once_at_the_fifth_report() {
        init_test_logging();
        let mut cfg = quiet_config();
        cfg.thresholds = Thresholds { warning: 100, kick: 100, ban: 100, jail: 5 };
        cfg.penalties.jail_enabled = true;
        let warden = MovementWarden::from_parts(cfg, MovementData::default());
        let world = MockWorld::default();
        let sink = RecordingSink::default();
        warden.register_player(1);

        // Double-jumps are exempt from debounce: every dispatch counts.
        warden.dispatch(1, &world, &sink, jump_sample(0.0, 0), MoveOpcode::Jump);
        for i in 1..=5u32 {
            warden.dispatch(1, &world, &sink, jump_sample(i as f32, 500 * i), MoveOpcode::Jump);
            assert_eq!(warden.report_summary(1).unwrap().total, u64::from(i));
        }
        assert_eq!(sink.jails(), 1);
        assert_eq!(sink.kicks(), 0);
        assert_eq!(sink.bans(), 0);
    }

    #[test]
    fn crossing_only_the_kick_threshold_kicks_and_nothing_else() {
        let mut cfg = quiet_config();
        cfg.thresholds = Thresholds { warning: 100, kick: 2, ban: 100, jail: 100 };
        cfg.penalties.kick_enabled = true;
        cfg.penalties.ban_enabled = true;
        cfg.penalties.jail_enabled = true;
        let warden = MovementWarden::from_parts(cfg, MovementData::default());
        let world = MockWorld::default();
        let sink = RecordingSink::default();
        warden.register_player(1);

        warden.dispatch(1, &world, &sink, jump_sample(0.0, 0), MoveOpcode::Jump);
        warden.dispatch(1, &world, &sink, jump_sample(1.0, 500), MoveOpcode::Jump);
        warden.dispatch(1, &world, &sink, jump_sample(2.0, 1000), MoveOpcode::Jump);

        assert_eq!(sink.kicks(), 1);
        assert_eq!(sink.bans(), 0);
        assert_eq!(sink.jails(), 0);
        assert_eq!(sink.warnings(), 0);
    }

    #[test]
    fn coinciding_thresholds_all_fire_on_the_same_report() {
        let mut cfg = quiet_config();
        cfg.thresholds = Thresholds { warning: 100, kick: 2, ban: 2, jail: 100 };
        cfg.penalties.kick_enabled = true;
        cfg.penalties.ban_enabled = true;
        let warden = MovementWarden::from_parts(cfg, MovementData::default());
        let world = MockWorld::default();
        let sink = RecordingSink::default();
        warden.register_player(1);

        warden.dispatch(1, &world, &sink, jump_sample(0.0, 0), MoveOpcode::Jump);
        warden.dispatch(1, &world, &sink, jump_sample(1.0, 500), MoveOpcode::Jump);
        warden.dispatch(1, &world, &sink, jump_sample(2.0, 1000), MoveOpcode::Jump);

        assert_eq!(sink.kicks(), 1);
        assert_eq!(sink.bans(), 1);
        let request = sink
            .taken()
            .into_iter()
            .find_map(|a| match a {
                Action::Ban(_, r) => Some(r),
                _ => None,
            })
            .unwrap();
        assert_eq!(request.duration_secs, 0);
        assert_eq!(request.author, AUTO_BAN_AUTHOR);
    }

    #[test]
    fn admin_reset_round_trips() {
        let warden = MovementWarden::from_parts(quiet_config(), MovementData::default());
        let world = MockWorld::default();
        let sink = RecordingSink::default();
        warden.register_player(1);

        warden.dispatch(1, &world, &sink, jump_sample(0.0, 0), MoveOpcode::Jump);
        warden.dispatch(1, &world, &sink, jump_sample(1.0, 500), MoveOpcode::Jump);
        assert!(warden.report_summary(1).unwrap().total > 0);

        warden.clear_reports(Some(1));
        let summary = warden.report_summary(1).unwrap();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.rate, 0.0);
        assert!(summary.by_type.iter().all(|&(_, n)| n == 0));
        // Tracking survives the reset.
        assert!(warden.last_movement(1).is_some());

        // Clearing everyone works with no guid.
        warden.dispatch(1, &world, &sink, jump_sample(2.0, 1000), MoveOpcode::Jump);
        warden.clear_reports(None);
        assert_eq!(warden.report_summary(1).unwrap().total, 0);
    }

    #[test]
    fn battleground_pen_reports_and_always_warns() {
        let mut cfg = quiet_config();
        cfg.thresholds.warning = 1;
        // Warnings disabled: the battleground path announces regardless.
        cfg.penalties.warn_enabled = false;
        let mut data = MovementData::default();
        data.battlegrounds.insert(
            489,
            crate::config::BattlegroundPens {
                alliance: crate::config::PenRect {
                    min_x: 1490.0,
                    max_x: 1558.0,
                    min_y: 1450.0,
                    max_y: 1510.0,
                },
                horde: crate::config::PenRect {
                    min_x: 900.0,
                    max_x: 970.0,
                    min_y: 1400.0,
                    max_y: 1462.0,
                },
            },
        );
        let warden = MovementWarden::from_parts(cfg, data);
        let mut world = MockWorld::default();
        world.map = 489;
        world.battleground = Some(BattlegroundState {
            map_id: 489,
            status: BattlegroundStatus::WaitJoin,
            team: Team::Alliance,
        });
        let sink = RecordingSink::default();
        warden.register_player(1);

        warden.dispatch(
            1,
            &world,
            &sink,
            sample_at_ms(1500.0, 1480.0, 352.0, 0),
            MoveOpcode::Heartbeat,
        );
        // Slips just past the pen edge: too short for the teleport check, so
        // the only counted report is the battleground path.
        warden.dispatch(
            1,
            &world,
            &sink,
            sample_at_ms(1480.0, 1480.0, 352.0, 400),
            MoveOpcode::Heartbeat,
        );

        let summary = warden.report_summary(1).unwrap();
        assert_eq!(
            summary.by_type.iter().find(|(d, _)| *d == checks::DetectionType::Teleport).unwrap().1,
            1
        );
        assert_eq!(sink.warnings(), 1);
    }

    #[test]
    fn waterwalk_branch_suppresses_zaxis() {
        let warden = MovementWarden::from_parts(quiet_config(), MovementData::default());
        let mut world = MockWorld::default();
        // Gliding well above the floor at a constant Z: a z-axis hit on dry
        // land, but the water-walk branch reports WaterWalk instead once the
        // world classifies the liquid under the player as walkable.
        world.floor = 0.0;
        world.liquid = LiquidStatus::WaterWalk;
        warden.register_player(1);
        dispatch_heartbeat(&warden, &world, sample_at_ms(0.0, 0.0, 8.0, 0));
        dispatch_heartbeat(&warden, &world, sample_at_ms(3.0, 0.0, 8.0, 1000));
        let summary = warden.report_summary(1).unwrap();
        let count_of = |d: checks::DetectionType| {
            summary.by_type.iter().find(|(t, _)| *t == d).unwrap().1
        };
        assert_eq!(count_of(checks::DetectionType::ZAxis), 0);
        // One burst hit recorded, not yet promoted.
        assert_eq!(summary.total, 0);
    }

    #[test]
    fn reload_swaps_the_snapshot() {
        let warden = warden();
        assert!(warden.config().enabled);
        let mut cfg = AnticheatConfig::default();
        cfg.enabled = false;
        warden.reload(WardenConfig { anticheat: cfg, data: MovementData::default() });
        assert!(!warden.config().enabled);
    }

    #[tokio::test]
    async fn housekeeping_task_runs_cleanup() {
        let warden = Arc::new(warden());
        warden.register_player(1);
        // Drive one burst hit so there is a window to expire eventually.
        let world = MockWorld::default();
        dispatch_heartbeat(&warden, &world, sample_at_ms(0.0, 0.0, 0.0, 0));
        dispatch_heartbeat(&warden, &world, sample_at_ms(100.0, 0.0, 0.0, 1000));

        let handle = spawn_housekeeping(warden.clone());
        // First tick fires immediately; cleanup must not disturb counters.
        tokio::time::sleep(Duration::from_millis(50)).await;
        handle.abort();
        assert_eq!(warden.tracked_players(), 1);
    }

    #[test]
    fn teleport_scenario_consumes_allowance_end_to_end() {
        let warden = MovementWarden::from_parts(quiet_config(), MovementData::default());
        let world = MockWorld::default();
        world.teleport_allowance.set(true);
        let sink = RecordingSink::default();
        warden.register_player(1);

        dispatch_heartbeat(&warden, &world, sample_at_ms(0.0, 0.0, 0.0, 0));
        warden.dispatch(
            1,
            &world,
            &sink,
            sample_at_ms(0.1, 60.0, 0.0, 400),
            MoveOpcode::Heartbeat,
        );
        assert_eq!(warden.report_summary(1).unwrap().total, 0);
        assert!(!world.teleport_allowance.get());

        // The same jump again, allowance spent: a counted teleport report.
        warden.dispatch(
            1,
            &world,
            &sink,
            sample_at_ms(0.2, 120.0, 0.0, 800),
            MoveOpcode::Heartbeat,
        );
        assert_eq!(warden.report_summary(1).unwrap().total, 1);
    }
}
