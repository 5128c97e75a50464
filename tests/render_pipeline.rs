use gradient_mandelbrot::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use gradient_mandelbrot::core::data::colour::Colour;
use gradient_mandelbrot::core::data::point::Point;
use gradient_mandelbrot::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use gradient_mandelbrot::presenters::file::frame_sequence::{write_frame_sequence, FrameFormat};
use gradient_mandelbrot::storage::keyframe_file::{load_keyframes, save_keyframes};
use gradient_mandelbrot::{
    interpolate, ExplorerSession, FrameRenderer, GradientPalette, GridSize, KeyframeSequence,
    RenderCoordinator, RenderError, RenderEvent, RenderJob, RenderRequest, SessionAction, Viewport,
};
use std::sync::Arc;
use tempfile::tempdir;

fn keyframes() -> Vec<Viewport> {
    vec![
        Viewport::default(),
        Viewport::new(-1.0, 0.5, -0.5, 0.25).unwrap(),
        Viewport::new(-0.8, -0.6, -0.1, 0.05).unwrap(),
    ]
}

#[test_log::test]
fn default_view_renders_identically_twice() {
    let coordinator = RenderCoordinator::new(FrameRenderer::default()).unwrap();
    let palette = Arc::new(GradientPalette::grayscale());

    let first = coordinator.submit(RenderJob::single_frame(
        Viewport::default(),
        GridSize::DEFAULT_CANVAS,
        Arc::clone(&palette),
    ));
    let second = coordinator.submit(RenderJob::single_frame(
        Viewport::default(),
        GridSize::DEFAULT_CANVAS,
        palette,
    ));

    let first = first.wait().unwrap().into_frames().remove(0);
    let second = second.wait().unwrap().into_frames().remove(0);

    assert_eq!(first.pixel_buffer.buffer().len(), 500 * 400 * 4);
    assert_eq!(first.pixel_buffer.buffer(), second.pixel_buffer.buffer());
}

#[test]
fn pixel_in_period_two_bulb_never_escapes() {
    let algorithm = MandelbrotAlgorithm::new(GridSize::DEFAULT_CANVAS, Viewport::default());
    let frame = FrameRenderer::default()
        .render(
            Viewport::default(),
            GridSize::DEFAULT_CANVAS,
            &GradientPalette::grayscale(),
        )
        .unwrap();
    let pixel = Point { x: 166, y: 200 };

    assert_eq!(algorithm.compute(pixel).unwrap(), 500);
    assert_eq!(frame.pixel_buffer.get_pixel(pixel).unwrap(), Colour::grey(254));
}

#[test_log::test]
fn three_keyframe_batch_reports_61_of_61_then_delivers_61_frames() {
    let path = interpolate(&keyframes(), 30).unwrap();
    assert_eq!(path.len(), 61);

    let coordinator = RenderCoordinator::new(FrameRenderer::default()).unwrap();
    let job = RenderJob::batch_video(
        path,
        GridSize::new(50, 40).unwrap(),
        Arc::new(GradientPalette::grayscale()),
    )
    .unwrap();
    let ticket = coordinator.submit(job);

    let mut last_progress = None;
    let frames = loop {
        match ticket.recv_event().unwrap() {
            RenderEvent::Progress {
                completed_frames,
                total_frames,
            } => last_progress = Some((completed_frames, total_frames)),
            RenderEvent::Video(frames) => break frames,
            RenderEvent::Frame(_) => panic!("batch jobs deliver a video"),
        }
    };

    assert_eq!(last_progress, Some((61, 61)));
    assert_eq!(frames.len(), 61);
}

#[test]
fn wire_request_round_trips_through_coordinator() {
    let request: RenderRequest = serde_json::from_value(serde_json::json!({
        "mode": "batch-video",
        "viewport": { "x_min": -2.0, "x_max": 1.0, "y_min": -1.0, "y_max": 1.0 },
        "width": 20,
        "height": 16,
        "gradient": vec![[10, 20, 30, 255]; 255],
        "path": keyframes(),
    }))
    .unwrap();

    let coordinator = RenderCoordinator::new(FrameRenderer::default()).unwrap();
    let frames = coordinator
        .submit_request(request)
        .unwrap()
        .wait()
        .unwrap()
        .into_frames();

    assert_eq!(frames.len(), 3);
    for frame in &frames {
        let corner = frame.pixel_buffer.get_pixel(Point { x: 0, y: 0 }).unwrap();
        assert_eq!(corner, Colour::opaque(10, 20, 30));
    }
}

#[test]
fn short_wire_gradient_never_reaches_worker() {
    let request: RenderRequest = serde_json::from_value(serde_json::json!({
        "mode": "single-frame",
        "viewport": { "x_min": -2.0, "x_max": 1.0, "y_min": -1.0, "y_max": 1.0 },
        "width": 20,
        "height": 16,
        "gradient": vec![[0, 0, 0, 255]; 10],
    }))
    .unwrap();

    let coordinator = RenderCoordinator::new(FrameRenderer::default()).unwrap();

    assert!(matches!(
        coordinator.submit_request(request),
        Err(RenderError::GradientIndexOutOfRange { len: 10, .. })
    ));
    assert_eq!(coordinator.last_completed_job(), 0);
}

#[test]
fn explored_path_exports_and_renders_as_video() {
    let session = ExplorerSession::default()
        .apply(SessionAction::SetViewport(keyframes()[1]))
        .unwrap()
        .apply(SessionAction::SetViewport(keyframes()[2]))
        .unwrap();
    let dir = tempdir().unwrap();
    let keyframe_file = dir.path().join("path.json");

    save_keyframes(&KeyframeSequence::from(session.keyframe_path()), &keyframe_file).unwrap();
    let loaded = load_keyframes(&keyframe_file).unwrap();
    assert_eq!(loaded.as_slice(), keyframes().as_slice());

    let coordinator = RenderCoordinator::new(FrameRenderer::default()).unwrap();
    let job = RenderJob::batch_video(
        interpolate(loaded.as_slice(), 2).unwrap(),
        GridSize::new(24, 16).unwrap(),
        Arc::clone(session.palette()),
    )
    .unwrap();
    let frames = coordinator.submit(job).wait().unwrap().into_frames();

    let video_dir = dir.path().join("video");
    let written = write_frame_sequence(&frames, &video_dir, FrameFormat::Png).unwrap();

    assert_eq!(written.len(), 5);
    assert!(written.last().unwrap().ends_with("frame_00004.png"));
}
