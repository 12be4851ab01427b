mod tests {
    use myrtio_neostrand::{BLACK, Color, PixelBuffer, PixelFormat, bytes_for, pack, pack_rgb};

    const FILL: Color = pack_rgb(7, 7, 7);

    fn marker(index: u16) -> Color {
        let index = u8::try_from(index).unwrap();
        pack_rgb(10 * (index + 1), index, 200)
    }

    fn numbered(count: u16) -> PixelBuffer<64> {
        let mut buffer = PixelBuffer::new(count, PixelFormat::RGB).unwrap();
        for index in 0..count {
            buffer.set_pixel(index, marker(index));
        }
        buffer
    }

    fn pixels<const N: usize>(buffer: &PixelBuffer<N>) -> Vec<Color> {
        (0..buffer.pixel_count()).map(|i| buffer.pixel(i)).collect()
    }

    #[test]
    fn test_capacity() {
        assert!(PixelBuffer::<12>::new(4, PixelFormat::RGB).is_some());
        assert!(PixelBuffer::<12>::new(3, PixelFormat::RGBW).is_some());
        assert!(PixelBuffer::<12>::new(5, PixelFormat::RGB).is_none());
        assert!(PixelBuffer::<12>::new(4, PixelFormat::GRBW).is_none());
        assert_eq!(bytes_for(60), 240);
    }

    #[test]
    fn test_length_follows_stride() {
        let rgb = PixelBuffer::<64>::new(5, PixelFormat::GRB).unwrap();
        assert_eq!(rgb.as_bytes().len(), 15);
        assert_eq!(rgb.stride(), 3);

        let rgbw = PixelBuffer::<64>::new(5, PixelFormat::GRBW).unwrap();
        assert_eq!(rgbw.as_bytes().len(), 20);
        assert_eq!(rgbw.stride(), 4);
        assert!(rgbw.as_bytes().iter().all(|&byte| byte == 0));
    }

    #[test]
    fn test_channel_order() {
        let mut grb = PixelBuffer::<64>::new(2, PixelFormat::GRB).unwrap();
        grb.set_pixel(1, pack_rgb(1, 2, 3));
        assert_eq!(grb.as_bytes(), &[0, 0, 0, 2, 1, 3]);

        let mut grbw = PixelBuffer::<64>::new(1, PixelFormat::GRBW).unwrap();
        grbw.set_pixel(0, pack(9, 1, 2, 3));
        assert_eq!(grbw.as_bytes(), &[2, 1, 3, 9]);
        assert_eq!(grbw.pixel(0), pack(9, 1, 2, 3));
    }

    #[test]
    fn test_rgb_drops_white() {
        let mut buffer = PixelBuffer::<64>::new(1, PixelFormat::RGB).unwrap();
        buffer.set_pixel(0, pack(9, 1, 2, 3));
        assert_eq!(buffer.as_bytes(), &[1, 2, 3]);
        assert_eq!(buffer.pixel(0), pack_rgb(1, 2, 3));
    }

    #[test]
    fn test_fill_and_clear() {
        let mut buffer = numbered(4);
        buffer.fill(FILL);
        assert_eq!(pixels(&buffer), vec![FILL; 4]);
        buffer.clear();
        assert_eq!(pixels(&buffer), vec![BLACK; 4]);
    }

    #[test]
    fn test_scroll_forward() {
        let mut buffer = numbered(5);
        buffer.scroll_forward(2, FILL);
        assert_eq!(
            pixels(&buffer),
            vec![FILL, FILL, marker(0), marker(1), marker(2)]
        );
    }

    #[test]
    fn test_scroll_backward() {
        let mut buffer = numbered(5);
        buffer.scroll_backward(2, FILL);
        assert_eq!(
            pixels(&buffer),
            vec![marker(2), marker(3), marker(4), FILL, FILL]
        );
    }

    #[test]
    fn test_scroll_loses_shifted_out_pixels() {
        let mut buffer = numbered(5);
        buffer.scroll_forward(2, FILL);
        buffer.scroll_backward(2, FILL);

        let after = pixels(&buffer);
        assert_eq!(after, vec![marker(0), marker(1), marker(2), FILL, FILL]);
        assert!(!after.contains(&marker(3)));
        assert!(!after.contains(&marker(4)));
    }

    #[test]
    fn test_scroll_wraps_amount() {
        let original = numbered(5);

        for amount in [0, 5, 10] {
            let mut buffer = original.clone();
            buffer.scroll_forward(amount, FILL);
            assert_eq!(buffer.as_bytes(), original.as_bytes());
            buffer.scroll_backward(amount, FILL);
            assert_eq!(buffer.as_bytes(), original.as_bytes());
        }

        let mut wrapped = original.clone();
        wrapped.scroll_forward(6, FILL);
        let mut single = original.clone();
        single.scroll_forward(1, FILL);
        assert_eq!(wrapped.as_bytes(), single.as_bytes());
    }

    #[test]
    fn test_scroll_by_all_but_one() {
        let mut buffer = numbered(4);
        buffer.scroll_forward(3, FILL);
        assert_eq!(pixels(&buffer), vec![FILL, FILL, FILL, marker(0)]);

        let mut buffer = numbered(4);
        buffer.scroll_backward(3, FILL);
        assert_eq!(pixels(&buffer), vec![marker(3), FILL, FILL, FILL]);
    }

    #[test]
    fn test_scroll_rgbw_stride() {
        let mut buffer = PixelBuffer::<64>::new(3, PixelFormat::RGBW).unwrap();
        buffer.set_pixel(0, pack(1, 2, 3, 4));
        buffer.set_pixel(1, pack(5, 6, 7, 8));
        buffer.set_pixel(2, pack(9, 10, 11, 12));

        buffer.scroll_forward(1, pack(255, 0, 0, 0));
        assert_eq!(
            buffer.as_bytes(),
            &[0, 0, 0, 255, 2, 3, 4, 1, 6, 7, 8, 5]
        );
    }

    #[test]
    fn test_step_feeds_black() {
        let mut buffer = numbered(3);
        buffer.step_forward();
        assert_eq!(pixels(&buffer), vec![BLACK, marker(0), marker(1)]);
        buffer.step_backward();
        assert_eq!(pixels(&buffer), vec![marker(0), marker(1), BLACK]);
    }

    #[test]
    fn test_empty_buffer() {
        let mut buffer = PixelBuffer::<0>::new(0, PixelFormat::GRBW).unwrap();
        assert!(buffer.is_empty());
        buffer.scroll_forward(3, FILL);
        buffer.scroll_backward(1, FILL);
        buffer.fill(FILL);
        assert!(buffer.as_bytes().is_empty());
        assert_eq!(buffer.frame().colors().count(), 0);
    }

    #[test]
    fn test_frame_colors() {
        let buffer = numbered(3);
        let frame = buffer.frame();
        assert_eq!(frame.len(), 3);
        assert_eq!(frame.format(), PixelFormat::RGB);
        assert_eq!(
            frame.colors().collect::<Vec<_>>(),
            vec![marker(0), marker(1), marker(2)]
        );
    }
}
