use std::time::{Duration, Instant};

use wall_common::{Channel, ChannelId, DetachError, Direction, FloatId, GroupFilter, Rect, TileId};

use super::*;
use crate::commands::WallCommand;
use crate::grid::Slot;
use crate::layout::LayoutEngine;
use crate::surface::{SurfaceCommand, SurfaceEventKind};
use crate::testing::{channels, RecordingHost};

type TestWall = Wall<RecordingHost, StaticChannelSource>;

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("c{i}")).collect()
}

fn wall_of(list: Vec<Channel>, config: GridConfig) -> (TestWall, Instant) {
    let mut wall = Wall::new(RecordingHost::new(), StaticChannelSource::new(list), config);
    let t0 = Instant::now();
    wall.start(t0);
    (wall, t0)
}

fn wall_n(n: usize, rows: i64, cols: i64) -> (TestWall, Instant) {
    let ids = names(n);
    let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    wall_of(channels(&refs), GridConfig::new(rows, cols))
}

fn tile(wall: &TestWall, channel: &str) -> TileId {
    wall.tile_for_channel(&ChannelId::from(channel))
        .unwrap_or_else(|| panic!("no tile for {channel}"))
}

fn loads(wall: &TestWall, channel: &str) -> usize {
    wall.host().loads_for(channel)
}

fn slot_channels(wall: &TestWall) -> Vec<Option<String>> {
    wall.grid()
        .slots()
        .iter()
        .map(|s| match s {
            Slot::Tile(t) | Slot::Detached(t) => {
                wall.session(*t).map(|s| s.channel().id.as_str().to_string())
            }
            Slot::Empty => None,
        })
        .collect()
}

fn assert_one_audible(wall: &TestWall) {
    let audible: Vec<TileId> = wall
        .sessions()
        .filter(|s| !s.is_muted())
        .map(|s| s.id())
        .collect();
    assert!(audible.len() <= 1, "more than one audible tile: {audible:?}");
    assert!(wall.host().unmuted().len() <= 1);
    if wall.global_mute() {
        assert!(audible.is_empty());
    } else if let Some(active) = wall.active() {
        assert_eq!(audible, vec![active]);
    }
}

// -- page reconciliation --

#[test]
fn start_fills_first_page_and_activates_first_tile() {
    let (mut wall, _) = wall_n(9, 3, 3);
    assert_eq!(wall.session_count(), 9);
    assert_eq!((wall.page(), wall.page_count()), (0, 1));
    assert_eq!(wall.active(), Some(tile(&wall, "c0")));
    assert_eq!(wall.host().unmuted(), vec!["c0"]);
    assert_eq!(wall.host().state("c0").map(|s| s.tile), Some(tile(&wall, "c0")));
    let events = wall.drain_events();
    assert!(events.contains(&WallEvent::PageChanged {
        page: 0,
        page_count: 1
    }));
    assert_one_audible(&wall);
}

#[test]
fn nine_channels_three_by_three_then_two_by_two() {
    let (mut wall, t0) = wall_n(9, 3, 3);
    let before: Vec<TileId> = (0..4).map(|i| tile(&wall, &format!("c{i}"))).collect();

    // Page 1 would be empty, so the request clamps back to page 0.
    wall.next_page(t0);
    assert_eq!(wall.page(), 0);
    assert_eq!(wall.session_count(), 9);
    for name in names(9) {
        assert_eq!(loads(&wall, &name), 1);
    }

    wall.apply_config(GridConfig::new(2, 2), t0);
    assert_eq!(wall.grid().slots().len(), 4);
    assert_eq!(wall.session_count(), 4);
    assert_eq!(wall.host().alive_count(), 4);
    for (i, id) in before.iter().enumerate() {
        let name = format!("c{i}");
        assert_eq!(tile(&wall, &name), *id);
        assert_eq!(loads(&wall, &name), 1);
    }
    assert_one_audible(&wall);
}

#[test]
fn same_page_reload_keeps_identity() {
    let (mut wall, t0) = wall_n(10, 2, 2);
    let c0 = tile(&wall, "c0");
    wall.load_page(0, t0);
    wall.refresh(t0);
    assert_eq!(tile(&wall, "c0"), c0);
    assert_eq!(loads(&wall, "c0"), 1);
}

#[test]
fn page_flip_disposes_and_creates() {
    let (mut wall, t0) = wall_n(10, 2, 2);
    let c0 = tile(&wall, "c0");
    wall.drain_events();

    wall.next_page(t0);
    assert_eq!(wall.page(), 1);
    assert!(wall.session(c0).is_none());
    assert_eq!(slot_channels(&wall), vec![
        Some("c4".to_string()),
        Some("c5".to_string()),
        Some("c6".to_string()),
        Some("c7".to_string()),
    ]);
    assert_eq!(wall.active(), Some(tile(&wall, "c4")));
    assert!(wall.drain_events().contains(&WallEvent::PageChanged {
        page: 1,
        page_count: 3
    }));

    wall.load_page(2, t0);
    assert_eq!(slot_channels(&wall), vec![Some("c8".to_string()), Some("c9".to_string()), None, None]);
    assert_eq!(wall.host().alive_count(), 2);
    assert_one_audible(&wall);
}

#[test]
fn growing_the_grid_keeps_existing_sessions() {
    let (mut wall, t0) = wall_n(10, 2, 2);
    let ids: Vec<TileId> = (0..4).map(|i| tile(&wall, &format!("c{i}"))).collect();

    wall.resize_grid(1, t0);
    assert_eq!((wall.config().rows(), wall.config().cols()), (3, 3));
    assert_eq!(wall.session_count(), 9);
    for (i, id) in ids.iter().enumerate() {
        assert_eq!(tile(&wall, &format!("c{i}")), *id);
        assert_eq!(loads(&wall, &format!("c{i}")), 1);
    }
}

#[test]
fn out_of_range_values_clamp() {
    assert_eq!(GridConfig::new(-1, 3).rows(), 1);

    let (mut wall, t0) = wall_n(3, 2, 2);
    wall.load_page(999, t0);
    assert_eq!(wall.page(), 0);
    wall.load_page(-4, t0);
    assert_eq!(wall.page(), 0);
    assert_eq!(loads(&wall, "c0"), 1);
}

#[test]
fn empty_source_gives_one_empty_page() {
    let (wall, _) = wall_n(0, 2, 2);
    assert_eq!(wall.page_count(), 1);
    assert!(wall.grid().slots().iter().all(|s| *s == Slot::Empty));
    assert_eq!(wall.active(), None);
}

#[test]
fn group_filter_keeps_matching_sessions() {
    let list = vec![
        Channel::new("A", "u").with_id("c0").with_group("World"),
        Channel::new("B", "u").with_id("c1").with_group("Finance"),
        Channel::new("C", "u").with_id("c2").with_group("World"),
        Channel::new("D", "u").with_id("c3").with_group("Tech"),
    ];
    let (mut wall, t0) = wall_of(list, GridConfig::new(2, 2));
    let c0 = tile(&wall, "c0");
    let c2 = tile(&wall, "c2");

    wall.set_group_filter(GroupFilter::Group("world".into()), t0);
    assert_eq!(wall.grid().slots(), &[Slot::Tile(c0), Slot::Tile(c2), Slot::Empty, Slot::Empty]);
    assert_eq!(wall.session_count(), 2);
    assert_eq!(loads(&wall, "c0"), 1);

    wall.set_group_filter(GroupFilter::All, t0);
    assert_eq!(tile(&wall, "c0"), c0);
    assert_eq!(loads(&wall, "c0"), 1);
    assert_eq!(loads(&wall, "c1"), 2);
    assert_one_audible(&wall);
}

#[test]
fn set_channels_reconciles_against_new_list() {
    let (mut wall, t0) = wall_n(3, 2, 2);
    let c0 = tile(&wall, "c0");
    let c1 = tile(&wall, "c1");

    wall.set_channels(channels(&["c0", "c2", "c9"]), t0);
    assert_eq!(tile(&wall, "c0"), c0);
    assert!(wall.session(c1).is_none());
    assert_eq!(loads(&wall, "c9"), 1);
    assert_eq!(loads(&wall, "c2"), 1);
    assert_eq!(wall.session_count(), 3);
}

#[test]
fn disabled_channels_are_not_shown() {
    let mut list = channels(&["c0", "c1", "c2"]);
    list[1].enabled = false;
    let (wall, _) = wall_of(list, GridConfig::new(2, 2));
    assert!(wall.tile_for_channel(&ChannelId::from("c1")).is_none());
    assert_eq!(wall.session_count(), 2);
}

#[test]
fn apply_config_before_start_only_resizes() {
    let mut wall = Wall::new(
        RecordingHost::new(),
        StaticChannelSource::new(channels(&["c0"])),
        GridConfig::new(2, 2),
    );
    wall.apply_config(GridConfig::new(3, 3), Instant::now());
    assert_eq!(wall.session_count(), 0);
    assert_eq!(wall.grid().slots().len(), 9);
}

#[test]
fn unchanged_config_is_a_no_op() {
    let (mut wall, t0) = wall_n(2, 2, 2);
    wall.host_mut().clear_log();
    let same = wall.config().clone();
    wall.apply_config(same, t0);
    assert!(wall.host().commands.is_empty());
}

#[test]
fn toggling_native_controls_reloads_everything() {
    let (mut wall, t0) = wall_n(2, 1, 2);
    wall.toggle_native_controls(t0);
    assert!(wall.config().show_native_controls());
    assert_eq!(loads(&wall, "c0"), 2);
    assert_eq!(loads(&wall, "c1"), 2);
    assert!(wall.host().commands.iter().any(|(_, c)| matches!(
        c,
        SurfaceCommand::Load {
            show_controls: true,
            ..
        }
    )));
}

// -- watchdog through the wall --

#[test]
fn stalled_tile_reloads_once_and_healthy_tile_never() {
    let config = GridConfig::new(1, 2)
        .with_health_poll_interval_secs(1.0)
        .with_stall_ticks_threshold(3);
    let (mut wall, t0) = wall_of(channels(&["stuck", "live"]), config);
    wall.host_mut().script("stuck", &[Some(5.0); 4]);
    wall.host_mut().script("live", &[Some(1.0), Some(2.0), Some(3.0), Some(4.0)]);
    wall.host_mut().ready_all();

    let second = Duration::from_secs(1);
    for k in 1..=3 {
        wall.tick(t0 + second * k);
    }
    assert_eq!(loads(&wall, "stuck"), 1);

    wall.tick(t0 + second * 4);
    assert_eq!(loads(&wall, "stuck"), 2);
    assert_eq!(loads(&wall, "live"), 1);

    let stuck = tile(&wall, "stuck");
    let reloads: Vec<WallEvent> = wall
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, WallEvent::TileReloading { .. }))
        .collect();
    assert_eq!(
        reloads,
        vec![WallEvent::TileReloading {
            tile: stuck,
            channel: ChannelId::from("stuck"),
            forced: true
        }]
    );
    assert_eq!(wall.session(stuck).map(|s| s.forced_reloads()), Some(1));
}

#[test]
fn next_deadline_follows_poll_interval() {
    let (wall, t0) = wall_n(2, 1, 2);
    assert_eq!(wall.next_deadline(), Some(t0 + Duration::from_secs(6)));
}

#[test]
fn ready_reasserts_audio_on_active_tile() {
    let (mut wall, t0) = wall_n(2, 1, 2);
    wall.reload_active(t0);
    assert!(wall.host().unmuted().is_empty());

    wall.host_mut().ready_all();
    wall.tick(t0);
    assert_eq!(wall.host().unmuted(), vec!["c0"]);
    let ready = wall
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, WallEvent::TileReady { .. }))
        .count();
    assert_eq!(ready, 2);
    assert_one_audible(&wall);
}

#[test]
fn callbacks_for_disposed_sessions_are_dropped() {
    let (mut wall, t0) = wall_n(8, 2, 2);
    let old = wall.host().surface_for("c0").unwrap();
    wall.next_page(t0);
    wall.drain_events();

    wall.host_mut().push(old, 1, SurfaceEventKind::Ready);
    wall.host_mut().push(
        old,
        1,
        SurfaceEventKind::Position {
            seq: 1,
            position: Some(3.0),
        },
    );
    wall.tick(t0);
    assert!(wall.drain_events().is_empty());
    assert_one_audible(&wall);
}

#[test]
fn stats_are_forwarded_as_events() {
    let (mut wall, t0) = wall_n(1, 1, 1);
    let surface = wall.host().surface_for("c0").unwrap();
    wall.host_mut().push(
        surface,
        1,
        SurfaceEventKind::Stats {
            position: 10.0,
            buffered_fraction: 0.5,
        },
    );
    wall.drain_events();
    wall.tick(t0);
    let c0 = tile(&wall, "c0");
    assert_eq!(
        wall.drain_events(),
        vec![WallEvent::TileStats {
            tile: c0,
            position: 10.0,
            buffered_fraction: 0.5
        }]
    );
}

// -- activation --

#[test]
fn move_active_walks_the_matrix() {
    let (mut wall, _) = wall_n(9, 3, 3);
    wall.move_active(Direction::Right);
    assert_eq!(wall.active(), Some(tile(&wall, "c1")));
    wall.move_active(Direction::Down);
    assert_eq!(wall.active(), Some(tile(&wall, "c4")));
    wall.move_active(Direction::Left);
    wall.move_active(Direction::Left);
    assert_eq!(wall.active(), Some(tile(&wall, "c3")));
    wall.move_active(Direction::Up);
    assert_eq!(wall.active(), Some(tile(&wall, "c0")));
    assert_one_audible(&wall);
}

#[test]
fn move_onto_empty_slot_is_a_no_op() {
    let (mut wall, _) = wall_n(5, 3, 3);
    let c4 = tile(&wall, "c4");
    wall.activate(c4);
    wall.move_active(Direction::Down);
    assert_eq!(wall.active(), Some(c4));
    wall.move_active(Direction::Right);
    assert_eq!(wall.active(), Some(c4));
}

#[test]
fn activate_slot_and_events() {
    let (mut wall, _) = wall_n(4, 2, 2);
    wall.drain_events();
    wall.activate_slot(3);
    let c3 = tile(&wall, "c3");
    assert_eq!(wall.active(), Some(c3));
    assert_eq!(
        wall.drain_events(),
        vec![WallEvent::ActiveChanged {
            tile: Some(c3),
            channel: Some(ChannelId::from("c3"))
        }]
    );
    wall.activate_slot(9);
    assert_eq!(wall.active(), Some(c3));
}

#[test]
fn global_mute_round_trip() {
    let (mut wall, _) = wall_n(4, 2, 2);
    wall.toggle_global_mute();
    assert!(wall.host().unmuted().is_empty());
    assert_one_audible(&wall);

    wall.activate(tile(&wall, "c2"));
    assert!(wall.host().unmuted().is_empty());

    wall.toggle_global_mute();
    assert_eq!(wall.host().unmuted(), vec!["c2"]);
    assert_one_audible(&wall);

    wall.set_global_mute(true);
    wall.unmute_active();
    assert!(!wall.global_mute());
    assert_eq!(wall.host().unmuted(), vec!["c2"]);
}

#[test]
fn single_active_invariant_holds_across_operations() {
    let (mut wall, t0) = wall_n(12, 2, 2);
    let script: Vec<WallCommand> = vec![
        WallCommand::MoveActive(Direction::Right),
        WallCommand::NextPage,
        WallCommand::ActivateSlot(2),
        WallCommand::ToggleGlobalMute,
        WallCommand::MoveActive(Direction::Down),
        WallCommand::ToggleGlobalMute,
        WallCommand::ToggleDetachActive,
        WallCommand::NextPage,
        WallCommand::ToggleFocusActive,
        WallCommand::MoveActive(Direction::Left),
        WallCommand::PrevPage,
        WallCommand::ResizeGrid(1),
        WallCommand::UnmuteActive,
        WallCommand::ReloadAll,
        WallCommand::ResizeGrid(-1),
    ];
    for cmd in script {
        wall.execute(cmd, t0).unwrap();
        wall.host_mut().ready_all();
        wall.tick(t0);
        assert_one_audible(&wall);
    }
}

// -- focus --

#[test]
fn focus_round_trip_restores_slots_without_reloads() {
    let (mut wall, t0) = wall_n(9, 3, 3);
    let slots_before = wall.grid().slots().to_vec();
    let c4 = tile(&wall, "c4");

    wall.enter_focus(c4, t0);
    assert_eq!(wall.mode(), PresentationMode::Focus);
    assert_eq!(wall.focused(), Some(c4));
    assert_eq!(wall.active(), Some(c4));
    let view = wall.presentation().focus.unwrap();
    assert_eq!(view.side.len(), 8);
    assert!(!view.side.contains(&c4));

    wall.exit_focus(t0);
    assert_eq!(wall.mode(), PresentationMode::Grid);
    assert_eq!(wall.grid().slots(), slots_before.as_slice());
    for name in names(9) {
        assert_eq!(loads(&wall, &name), 1);
    }
    assert_eq!(wall.host().alive_count(), 9);
    assert_one_audible(&wall);
}

#[test]
fn focus_toggle_semantics() {
    let (mut wall, t0) = wall_n(4, 2, 2);
    let (c0, c1, c2) = (tile(&wall, "c0"), tile(&wall, "c1"), tile(&wall, "c2"));

    wall.enter_focus(c0, t0);
    wall.enter_focus(c1, t0);
    assert_eq!(wall.focused(), Some(c1));
    assert!(wall.presentation().focus.unwrap().side.contains(&c0));

    // Toggling on a different tile while focused just exits.
    wall.toggle_focus(c2, t0);
    assert_eq!(wall.focused(), None);

    wall.toggle_focus(c2, t0);
    assert_eq!(wall.focused(), Some(c2));
    wall.toggle_focus(c2, t0);
    assert_eq!(wall.focused(), None);
}

#[test]
fn page_change_exits_focus() {
    let (mut wall, t0) = wall_n(8, 2, 2);
    wall.enter_focus(tile(&wall, "c1"), t0);
    wall.next_page(t0);
    assert_eq!(wall.focused(), None);
    assert_eq!(wall.page(), 1);
}

// -- detach --

#[test]
fn detach_capacity_is_enforced_without_mutation() {
    let (mut wall, t0) = wall_n(6, 2, 3);
    for i in 0..4 {
        let t = tile(&wall, &format!("c{i}"));
        assert_eq!(wall.detach(t, t0), Ok(FloatId(i as u64 + 1)));
    }
    let detached_before = wall.detached().surfaces().to_vec();
    let slots_before = wall.grid().slots().to_vec();
    wall.drain_events();

    let c4 = tile(&wall, "c4");
    assert_eq!(wall.detach(c4, t0), Err(DetachError::CapacityReached { max: 4 }));
    assert_eq!(wall.detached().surfaces(), detached_before.as_slice());
    assert_eq!(wall.grid().slots(), slots_before.as_slice());
    assert_eq!(
        wall.drain_events(),
        vec![WallEvent::DetachRefused {
            tile: c4,
            reason: DetachError::CapacityReached { max: 4 }
        }]
    );
}

#[test]
fn detach_unknown_or_twice_is_refused() {
    let (mut wall, t0) = wall_n(2, 1, 2);
    assert_eq!(wall.detach(TileId(99), t0), Err(DetachError::UnknownTile(TileId(99))));
    let c0 = tile(&wall, "c0");
    wall.detach(c0, t0).unwrap();
    assert_eq!(wall.detach(c0, t0), Err(DetachError::AlreadyDetached(c0)));
    assert_eq!(wall.reattach(tile(&wall, "c1"), t0), Err(DetachError::NotDetached(tile(&wall, "c1"))));
}

#[test]
fn detached_tile_keeps_playing_across_page_flips() {
    let (mut wall, t0) = wall_n(8, 2, 2);
    let c1 = tile(&wall, "c1");
    wall.detach(c1, t0).unwrap();
    assert_eq!(wall.grid().slots()[1], Slot::Detached(c1));
    assert_eq!(wall.mode(), PresentationMode::DetachedOverlay);

    wall.next_page(t0);
    assert!(wall.session(c1).is_some());
    assert_eq!(wall.session_count(), 5);
    assert!(!wall.session(c1).unwrap().is_paused());
    assert!(!wall.host().state("c1").unwrap().paused);

    wall.prev_page(t0);
    assert_eq!(wall.grid().slots()[1], Slot::Detached(c1));
    assert_eq!(loads(&wall, "c1"), 1);
    assert_eq!(loads(&wall, "c0"), 2);
}

#[test]
fn reattach_returns_session_to_its_slot() {
    let (mut wall, t0) = wall_n(4, 2, 2);
    let c1 = tile(&wall, "c1");
    wall.detach(c1, t0).unwrap();
    wall.reattach(c1, t0).unwrap();
    assert_eq!(wall.grid().slots()[1], Slot::Tile(c1));
    assert_eq!(wall.detached().count(), 0);
    assert_eq!(wall.mode(), PresentationMode::Grid);
    assert_eq!(loads(&wall, "c1"), 1);
}

#[test]
fn reattach_off_page_disposes_the_session() {
    let (mut wall, t0) = wall_n(8, 2, 2);
    let c1 = tile(&wall, "c1");
    wall.detach(c1, t0).unwrap();
    wall.next_page(t0);
    wall.reattach(c1, t0).unwrap();
    assert!(wall.session(c1).is_none());
    assert!(wall.host().state("c1").is_none());
}

#[test]
fn closing_floating_surface_pauses_then_returns_to_grid() {
    let (mut wall, t0) = wall_n(4, 2, 2);
    let c1 = tile(&wall, "c1");
    let surface = wall.session(c1).and_then(|s| s.surface()).unwrap();
    wall.detach(c1, t0).unwrap();
    wall.host_mut().clear_log();

    wall.close_detached(c1, t0).unwrap();
    assert_eq!(wall.host().commands, vec![(surface, SurfaceCommand::Pause)]);
    assert!(wall.session(c1).unwrap().is_paused());
    assert!(wall.host().state("c1").unwrap().paused);
    assert_eq!(wall.detached().count(), 0);
    assert_eq!(wall.grid().slots()[1], Slot::Tile(c1));
    assert_eq!(wall.close_detached(c1, t0), Err(DetachError::NotDetached(c1)));

    wall.activate(c1);
    assert!(!wall.session(c1).unwrap().is_paused());
    assert!(!wall.host().state("c1").unwrap().paused);
}

#[test]
fn detach_events_carry_the_real_channel() {
    let (mut wall, t0) = wall_n(4, 2, 2);
    let c1 = tile(&wall, "c1");
    wall.drain_events();

    let float = wall.detach(c1, t0).unwrap();
    wall.reattach(c1, t0).unwrap();
    wall.detach(c1, t0).unwrap();
    wall.close_detached(c1, t0).unwrap();

    let channels: Vec<ChannelId> = wall
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            WallEvent::Detached { channel, .. } | WallEvent::Reattached { channel, .. } => {
                Some(channel)
            }
            _ => None,
        })
        .collect();
    assert_eq!(channels, vec![ChannelId::from("c1"); 4]);
    assert_eq!(float, FloatId(1));
}

#[test]
fn detaching_focused_tile_exits_focus() {
    let (mut wall, t0) = wall_n(4, 2, 2);
    let c0 = tile(&wall, "c0");
    wall.enter_focus(c0, t0);
    wall.detach(c0, t0).unwrap();
    assert_eq!(wall.focused(), None);
    assert_eq!(wall.mode(), PresentationMode::DetachedOverlay);
    assert_eq!(wall.grid().slots()[0], Slot::Detached(c0));
    for name in names(4) {
        assert_eq!(loads(&wall, &name), 1);
    }
}

#[test]
fn detaching_side_tile_keeps_focus() {
    let (mut wall, t0) = wall_n(4, 2, 2);
    let (c0, c1) = (tile(&wall, "c0"), tile(&wall, "c1"));
    wall.enter_focus(c0, t0);
    wall.detach(c1, t0).unwrap();
    assert_eq!(wall.focused(), Some(c0));
    assert!(!wall.presentation().focus.unwrap().side.contains(&c1));

    wall.reattach(c1, t0).unwrap();
    assert!(wall.presentation().focus.unwrap().side.contains(&c1));
}

#[test]
fn max_detached_is_configurable() {
    let (wall, t0) = wall_n(3, 1, 3);
    let mut wall = wall.with_max_detached(1);
    let c0 = tile(&wall, "c0");
    wall.execute(WallCommand::ToggleDetachActive, t0).unwrap();
    assert!(wall.detached().is_detached(c0));

    wall.activate(tile(&wall, "c1"));
    assert_eq!(
        wall.execute(WallCommand::ToggleDetachActive, t0),
        Err(DetachError::CapacityReached { max: 1 })
    );
}

#[test]
fn lowering_detach_cap_returns_newest_tiles() {
    let (mut wall, t0) = wall_n(4, 2, 2);
    let (c0, c1, c2) = (tile(&wall, "c0"), tile(&wall, "c1"), tile(&wall, "c2"));
    for t in [c0, c1, c2] {
        wall.detach(t, t0).unwrap();
    }
    let loads_before = loads(&wall, "c2");

    wall.set_max_detached(1, t0);
    assert_eq!(wall.detached().max(), 1);
    assert_eq!(wall.detached().count(), 1);
    assert!(wall.detached().is_detached(c0));
    assert_eq!(wall.grid().slots()[1], Slot::Tile(c1));
    assert_eq!(wall.grid().slots()[2], Slot::Tile(c2));
    assert_eq!(loads(&wall, "c2"), loads_before);

    wall.set_max_detached(0, t0);
    assert_eq!(wall.detached().max(), 1);
    assert_eq!(wall.detached().count(), 1);
}

// -- presentation --

#[test]
fn surface_layout_per_mode() {
    let (mut wall, t0) = wall_n(4, 2, 2);
    let engine = LayoutEngine {
        gap: 0,
        outer_padding: 0,
        ..LayoutEngine::default()
    };
    let viewport = Rect::new(0.0, 0.0, 1000.0, 1000.0);
    let (c0, c1) = (tile(&wall, "c0"), tile(&wall, "c1"));

    let layout = wall.surface_layout(viewport, &engine);
    assert_eq!(layout.len(), 4);
    assert!(layout.iter().all(|p| p.visible));
    let p0 = layout.iter().find(|p| p.tile == c0).unwrap();
    assert_eq!(p0.rect, Rect::new(0.0, 0.0, 500.0, 500.0));
    assert_eq!(wall.tile_at(viewport, &engine, 10.0, 10.0), Some(c0));

    wall.detach(c1, t0).unwrap();
    let layout = wall.surface_layout(viewport, &engine);
    let p1 = layout.iter().find(|p| p.tile == c1).unwrap();
    assert_eq!(p1.rect, engine.floating(viewport, 0));
    assert_eq!(wall.tile_at(viewport, &engine, 990.0, 990.0), Some(c1));
    assert_eq!(
        wall.tile_at_excluding(viewport, &engine, 990.0, 990.0, &[c1]),
        Some(tile(&wall, "c3"))
    );

    wall.enter_focus(c0, t0);
    let layout = wall.surface_layout(viewport, &engine);
    let (main, _) = engine.focus_regions(viewport);
    assert_eq!(layout.iter().find(|p| p.tile == c0).unwrap().rect, main);
}

#[test]
fn presentation_snapshot_serializes() {
    let (wall, _) = wall_n(2, 1, 2);
    let snapshot = wall.presentation();
    assert_eq!(snapshot.mode, PresentationMode::Grid);
    assert_eq!(snapshot.slots.len(), 2);
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"mode\":\"Grid\""));
}

#[test]
fn shutdown_releases_every_surface() {
    let (mut wall, t0) = wall_n(4, 2, 2);
    wall.detach(tile(&wall, "c3"), t0).unwrap();
    wall.shutdown();
    assert_eq!(wall.session_count(), 0);
    assert_eq!(wall.host().alive_count(), 0);
    assert_eq!(wall.detached().count(), 0);
    assert_eq!(wall.next_deadline(), None);
}
