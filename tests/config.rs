mod tests {
    use ringlock_composer::color::unpack;
    use ringlock_composer::diagnostics::fill_wheel;
    use ringlock_composer::ring::Ring;
    use ringlock_composer::{FaceConfig, BRIGHTNESS_FLOOR, DEFAULT_CURRENT_LIMIT};

    #[test]
    fn test_defaults() {
        let config = FaceConfig::default();
        assert_eq!(config.brightness_outer, 255);
        assert_eq!(config.brightness_inner, 255);
        assert_eq!(config.offset_outer, 0);
        assert_eq!(config.offset_inner, 0);
        assert_eq!(config.current_limit_ma, DEFAULT_CURRENT_LIMIT);
    }

    #[test]
    fn test_sanitized_enforces_brightness_floor() {
        let config = FaceConfig {
            brightness_outer: 0,
            brightness_inner: 9,
            ..FaceConfig::default()
        };
        let sane = config.sanitized();
        assert_eq!(sane.brightness_outer, BRIGHTNESS_FLOOR);
        assert_eq!(sane.brightness_inner, BRIGHTNESS_FLOOR);
    }

    #[test]
    fn test_sanitized_keeps_values_above_floor() {
        let config = FaceConfig {
            brightness_outer: 10,
            brightness_inner: 200,
            ..FaceConfig::default()
        };
        let sane = config.sanitized();
        assert_eq!(sane.brightness_outer, 10);
        assert_eq!(sane.brightness_inner, 200);
    }

    #[test]
    fn test_fill_wheel_covers_ring() {
        let mut ring: Ring<91> = Ring::new();
        fill_wheel(&mut ring, 0);

        // every pixel lit, full hue cycle around the ring
        for (i, &color) in ring.target().iter().enumerate() {
            let (r, g, b) = unpack(color);
            assert_eq!(
                u16::from(r) + u16::from(g) + u16::from(b),
                255,
                "pixel {i}"
            );
        }
        assert_eq!(ring.write_errors(), 0);
    }

    #[test]
    fn test_fill_wheel_phase_rotates_pattern() {
        let mut a: Ring<12> = Ring::new();
        let mut b: Ring<12> = Ring::new();
        fill_wheel(&mut a, 0);
        fill_wheel(&mut b, 128);
        assert_ne!(a.target(), b.target());
    }
}
