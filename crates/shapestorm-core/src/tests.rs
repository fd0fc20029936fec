#[cfg(test)]
mod tests {
    use crate::commands::{Action, ActionKind, SceneCommand};
    use crate::config::GameConfig;
    use crate::state::RenderFrame;
    use crate::types::{Rgba, Vec2};

    #[test]
    fn test_vec2_arithmetic() {
        let a = Vec2::new(100.0, 100.0);
        let b = Vec2::new(300.0, 500.0);

        assert_eq!(a + b, Vec2::new(400.0, 600.0));
        assert_eq!(a - b, Vec2::new(-200.0, -400.0));
        assert_eq!(a * 2.0, Vec2::new(200.0, 200.0));
        assert_eq!(a / 2.0, Vec2::new(50.0, 50.0));

        let mut c = a;
        c += b;
        assert_eq!(c, Vec2::new(400.0, 600.0));
        c -= b;
        assert_eq!(c, a);
        c *= 2.0;
        assert_eq!(c, Vec2::new(200.0, 200.0));
        c /= 2.0;
        assert_eq!(c, a);
    }

    #[test]
    fn test_vec2_distance_and_length() {
        assert_eq!(Vec2::new(0.0, 0.0).distance_to(Vec2::new(3.0, 4.0)), 5.0);
        assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn test_vec2_normalized() {
        let unit = Vec2::new(3.0, 4.0).normalized().unwrap();
        assert!((unit.length() - 1.0).abs() < 1e-6);
        assert!((unit.x - 0.6).abs() < 1e-6);
        assert!((unit.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_vec2_normalized_zero_is_none() {
        assert_eq!(Vec2::ZERO.normalized(), None);
    }

    #[test]
    fn test_vec2_from_angle() {
        let v = Vec2::from_angle(0.0, 5.0);
        assert!((v.x - 5.0).abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);

        // atan2(4, 3) heading should recover a 3-4-5 triangle.
        let v = Vec2::from_angle(4.0f32.atan2(3.0), 5.0);
        assert!((v.x - 3.0).abs() < 1e-5);
        assert!((v.y - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_rgba_rgb_is_opaque() {
        let c = Rgba::rgb(10, 20, 30);
        assert_eq!(c.a, 255);
    }

    #[test]
    fn test_window_center() {
        let config = GameConfig::default();
        assert_eq!(config.window.center(), Vec2::new(640.0, 360.0));
    }

    #[test]
    fn test_game_config_serde_round_trip() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.player.speed, config.player.speed);
        assert_eq!(back.enemy.spawn_interval, config.enemy.spawn_interval);
        assert_eq!(back.bullet.lifespan, config.bullet.lifespan);
        assert_eq!(back.window.frame_rate_limit, config.window.frame_rate_limit);
    }

    #[test]
    fn test_scene_command_serde() {
        let commands = vec![
            SceneCommand::Action {
                action: Action::start(ActionKind::Up),
            },
            SceneCommand::Action {
                action: Action::end(ActionKind::Right),
            },
            SceneCommand::Action {
                action: Action::start(ActionKind::SpecialShoot),
            },
            SceneCommand::SetTarget {
                target: Vec2::new(42.0, 17.0),
            },
            SceneCommand::SetPaused { paused: true },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: SceneCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }
    }

    #[test]
    fn test_render_frame_serde() {
        let frame = RenderFrame::default();
        let json = serde_json::to_string(&frame).unwrap();
        let back: RenderFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(back.frame, frame.frame);
        assert_eq!(back.shapes.len(), 0);
    }
}
