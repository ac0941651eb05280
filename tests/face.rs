mod tests {
    use ringlock_composer::color::{interpolate, pack, BLACK};
    use ringlock_composer::face::{render_hour, render_minutes};
    use ringlock_composer::ring::Ring;

    const HOURS: u32 = 0x00FF_0000;
    const MINUTES: u32 = 0x0000_FF00;
    const SECONDS: u32 = 0x0000_00FF;

    fn lit_pixels(target: &[u32]) -> Vec<usize> {
        target
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != BLACK)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_render_hour_morning() {
        let mut ring: Ring<12> = Ring::new();
        for hour in 1..=12u8 {
            render_hour(&mut ring, hour, HOURS);
            assert_eq!(lit_pixels(ring.target()), vec![usize::from(hour) - 1]);
            assert_eq!(ring.target()[usize::from(hour) - 1], HOURS);
        }
    }

    #[test]
    fn test_render_hour_afternoon_wraps_to_12h() {
        let mut ring: Ring<12> = Ring::new();
        for hour in 13..=23u8 {
            render_hour(&mut ring, hour, HOURS);
            assert_eq!(lit_pixels(ring.target()), vec![usize::from(hour) - 13]);
        }
    }

    #[test]
    fn test_render_hour_midnight_lights_twelve() {
        let mut ring: Ring<12> = Ring::new();
        render_hour(&mut ring, 0, HOURS);
        assert_eq!(lit_pixels(ring.target()), vec![11]);
        assert_eq!(ring.write_errors(), 0);
    }

    #[test]
    fn test_render_hour_flushes_previous_pixel() {
        let mut ring: Ring<12> = Ring::new();
        render_hour(&mut ring, 5, HOURS);
        render_hour(&mut ring, 6, HOURS);
        assert_eq!(lit_pixels(ring.target()), vec![5]);
    }

    #[test]
    fn test_render_minutes_start_of_minute() {
        let mut ring: Ring<91> = Ring::new();
        render_minutes(&mut ring, 0, 0.0, MINUTES, SECONDS);

        // comet tail sits on the last pixel at full strength, head and
        // minute hand are still black
        assert_eq!(ring.target()[90], SECONDS);
        for i in 0..90 {
            assert_eq!(ring.target()[i], BLACK, "pixel {i}");
        }
    }

    #[test]
    fn test_render_minutes_mid_minute_arc_and_comet() {
        let mut ring: Ring<91> = Ring::new();
        render_minutes(&mut ring, 30, 0.5, MINUTES, SECONDS);

        let minute_position = 30.5f32 / 60.0 * 91.0;
        let minute_head = minute_position as usize;
        assert_eq!(minute_head, 46);
        let minute_fraction = minute_position - minute_position.floor();

        // solid arc below the head, except where the comet overrides
        for i in 0..minute_head {
            if i == 44 || i == 45 {
                continue;
            }
            assert_eq!(ring.target()[i], MINUTES, "pixel {i}");
        }
        // sub-pixel head
        assert_eq!(
            ring.target()[minute_head],
            interpolate(BLACK, MINUTES, minute_fraction)
        );
        // seconds comet at 45.5: tail fading out on 44, head fading in on 45
        assert_eq!(ring.target()[44], interpolate(BLACK, SECONDS, 0.5));
        assert_eq!(ring.target()[45], interpolate(BLACK, SECONDS, 0.5));
        // beyond the head everything is dark
        for i in minute_head + 1..91 {
            assert_eq!(ring.target()[i], BLACK, "pixel {i}");
        }
    }

    #[test]
    fn test_render_minutes_rollover_is_continuous() {
        let mut ring: Ring<91> = Ring::new();

        render_minutes(&mut ring, 59, 0.99999, MINUTES, SECONDS);
        // both heads sit on the last pixel just before rollover
        assert_ne!(ring.target()[90], BLACK);
        assert_eq!(ring.write_errors(), 0);

        render_minutes(&mut ring, 0, 0.0, MINUTES, SECONDS);
        // heads reset to index 0, one ring step away from 90
        let lit = lit_pixels(ring.target());
        assert_eq!(lit, vec![90]);
    }

    #[test]
    fn test_clock_face_three_oclock() {
        let mut inner: Ring<12> = Ring::new();
        let mut outer: Ring<91> = Ring::new();

        render_hour(&mut inner, 3, HOURS);
        render_minutes(&mut outer, 0, 0.25, MINUTES, SECONDS);

        assert_eq!(lit_pixels(inner.target()), vec![2]);
        assert_eq!(inner.target()[2], HOURS);

        // minute hand barely into pixel 0
        let minute_position = 0.25f32 / 60.0 * 91.0;
        assert_eq!(
            outer.target()[0],
            interpolate(BLACK, MINUTES, minute_position)
        );
        // seconds comet at 0.25 * 91 = 22.75
        assert_eq!(outer.target()[21], interpolate(BLACK, SECONDS, 0.25));
        assert_eq!(outer.target()[22], interpolate(BLACK, SECONDS, 0.75));
        for i in 1..91 {
            if i == 21 || i == 22 {
                continue;
            }
            assert_eq!(outer.target()[i], BLACK, "pixel {i}");
        }
    }
}
