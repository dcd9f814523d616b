use crate::detection::domain::feature_extractor::FeatureExtractor;
use crate::interaction::guidance::InteractionState;
use crate::pipeline::fps_tracker::FpsTracker;
use crate::pipeline::run_stats::{RunStats, RunSummary};
use crate::rendering::compositor::Compositor;
use crate::shared::constants::{EXIT_KEY, EXIT_KEY_WAIT_MS};
use crate::video::domain::frame_sink::FrameSink;
use crate::video::domain::frame_source::FrameSource;

/// Why the loop left its running state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The user pressed the exit key.
    ExitKey,
    /// The source could not produce a frame; fatal for the run.
    SourceExhausted,
}

/// Orchestrates the interactive loop: acquire, detect, derive state,
/// track frame rate, compose, display, poll for exit.
///
/// Each iteration completes fully before the next begins; cancellation is
/// polled once per iteration. The capture and display resources are
/// released on every exit path, including errors. No retries anywhere: a
/// failed acquisition ends the run rather than masking camera failures.
pub struct GreetLoopUseCase {
    source: Box<dyn FrameSource>,
    sink: Box<dyn FrameSink>,
    extractor: FeatureExtractor,
    compositor: Compositor,
    fps: FpsTracker,
}

impl GreetLoopUseCase {
    pub fn new(
        source: Box<dyn FrameSource>,
        sink: Box<dyn FrameSink>,
        extractor: FeatureExtractor,
        compositor: Compositor,
    ) -> Self {
        Self {
            source,
            sink,
            extractor,
            compositor,
            fps: FpsTracker::new(),
        }
    }

    /// Runs until the exit key is pressed or the source fails, then
    /// reports the statistics collected so far.
    pub fn execute(&mut self) -> Result<(RunSummary, StopReason), Box<dyn std::error::Error>> {
        let mut stats = RunStats::new();
        let outcome = self.run_loop(&mut stats);
        self.source.close();
        self.sink.close();
        let reason = outcome?;
        Ok((stats.summary(), reason))
    }

    fn run_loop(&mut self, stats: &mut RunStats) -> Result<StopReason, Box<dyn std::error::Error>> {
        loop {
            let mut frame = match self.source.next_frame()? {
                Some(frame) => frame,
                None => {
                    log::error!("frame acquisition failed, stopping the run");
                    return Ok(StopReason::SourceExhausted);
                }
            };
            stats.record_frame();

            let observations = self.extractor.extract(&mut frame)?;
            let state = InteractionState::from_observations(&observations);
            let fps = self.fps.tick();
            self.compositor.render(&mut frame, fps, &state)?;
            self.sink.show(&frame)?;

            if self.sink.poll_key(EXIT_KEY_WAIT_MS)? == Some(EXIT_KEY) {
                log::info!("exit requested");
                return Ok(StopReason::ExitKey);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::region_detector::{DetectParams, RegionDetector};
    use crate::shared::region::Region;
    use opencv::core::{Mat, Scalar, CV_8UC3};
    use std::cell::RefCell;
    use std::rc::Rc;

    // --- Stubs ---

    struct ScriptedSource {
        frames: Vec<Mat>,
        closed: Rc<RefCell<bool>>,
    }

    impl ScriptedSource {
        fn new(count: usize) -> Self {
            Self {
                frames: (0..count).map(|_| test_frame()).collect(),
                closed: Rc::new(RefCell::new(false)),
            }
        }
    }

    impl FrameSource for ScriptedSource {
        fn next_frame(&mut self) -> Result<Option<Mat>, Box<dyn std::error::Error>> {
            if self.frames.is_empty() {
                Ok(None)
            } else {
                Ok(Some(self.frames.remove(0)))
            }
        }

        fn close(&mut self) {
            *self.closed.borrow_mut() = true;
        }
    }

    struct RecordingSink {
        shown: Rc<RefCell<usize>>,
        keys: Vec<Option<char>>,
        polls: usize,
        closed: Rc<RefCell<bool>>,
    }

    impl RecordingSink {
        fn new(keys: Vec<Option<char>>) -> Self {
            Self {
                shown: Rc::new(RefCell::new(0)),
                keys,
                polls: 0,
                closed: Rc::new(RefCell::new(false)),
            }
        }
    }

    impl FrameSink for RecordingSink {
        fn show(&mut self, _frame: &Mat) -> Result<(), Box<dyn std::error::Error>> {
            *self.shown.borrow_mut() += 1;
            Ok(())
        }

        fn poll_key(&mut self, _wait_ms: i32) -> Result<Option<char>, Box<dyn std::error::Error>> {
            let key = self.keys.get(self.polls).copied().flatten();
            self.polls += 1;
            Ok(key)
        }

        fn close(&mut self) {
            *self.closed.borrow_mut() = true;
        }
    }

    struct EmptyDetector;

    impl RegionDetector for EmptyDetector {
        fn detect(
            &mut self,
            _gray: &Mat,
            _params: &DetectParams,
        ) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
            Ok(vec![])
        }
    }

    struct FailingDetector;

    impl RegionDetector for FailingDetector {
        fn detect(
            &mut self,
            _gray: &Mat,
            _params: &DetectParams,
        ) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
            Err("detector error".into())
        }
    }

    // --- Helpers ---

    fn test_frame() -> Mat {
        Mat::new_rows_cols_with_default(120, 160, CV_8UC3, Scalar::all(128.0)).unwrap()
    }

    fn empty_extractor() -> FeatureExtractor {
        FeatureExtractor::new(
            Box::new(EmptyDetector),
            Box::new(EmptyDetector),
            Box::new(EmptyDetector),
        )
    }

    fn use_case(
        source: ScriptedSource,
        sink: RecordingSink,
        extractor: FeatureExtractor,
    ) -> GreetLoopUseCase {
        GreetLoopUseCase::new(
            Box::new(source),
            Box::new(sink),
            extractor,
            Compositor::new(),
        )
    }

    // --- Tests ---

    #[test]
    fn test_stops_when_source_is_exhausted() {
        let source = ScriptedSource::new(3);
        let sink = RecordingSink::new(vec![]);
        let shown = sink.shown.clone();

        let mut uc = use_case(source, sink, empty_extractor());
        let (summary, reason) = uc.execute().unwrap();

        assert_eq!(reason, StopReason::SourceExhausted);
        assert_eq!(summary.frames, 3);
        assert_eq!(*shown.borrow(), 3);
    }

    #[test]
    fn test_exit_key_stops_the_loop() {
        let source = ScriptedSource::new(10);
        let sink = RecordingSink::new(vec![None, None, Some('q')]);

        let mut uc = use_case(source, sink, empty_extractor());
        let (summary, reason) = uc.execute().unwrap();

        assert_eq!(reason, StopReason::ExitKey);
        assert_eq!(summary.frames, 3);
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let source = ScriptedSource::new(10);
        let sink = RecordingSink::new(vec![Some('a'), Some(' '), Some('q')]);

        let mut uc = use_case(source, sink, empty_extractor());
        let (summary, reason) = uc.execute().unwrap();

        assert_eq!(reason, StopReason::ExitKey);
        assert_eq!(summary.frames, 3);
    }

    #[test]
    fn test_closes_source_and_sink_on_exhaustion() {
        let source = ScriptedSource::new(1);
        let sink = RecordingSink::new(vec![]);
        let source_closed = source.closed.clone();
        let sink_closed = sink.closed.clone();

        let mut uc = use_case(source, sink, empty_extractor());
        uc.execute().unwrap();

        assert!(*source_closed.borrow());
        assert!(*sink_closed.borrow());
    }

    #[test]
    fn test_detector_error_still_releases_resources() {
        let source = ScriptedSource::new(3);
        let sink = RecordingSink::new(vec![]);
        let source_closed = source.closed.clone();
        let sink_closed = sink.closed.clone();

        let extractor = FeatureExtractor::new(
            Box::new(FailingDetector),
            Box::new(EmptyDetector),
            Box::new(EmptyDetector),
        );
        let mut uc = use_case(source, sink, extractor);
        let result = uc.execute();

        assert!(result.is_err());
        assert!(*source_closed.borrow());
        assert!(*sink_closed.borrow());
    }

    #[test]
    fn test_empty_source_reports_zero_frames() {
        let source = ScriptedSource::new(0);
        let sink = RecordingSink::new(vec![]);
        let shown = sink.shown.clone();

        let mut uc = use_case(source, sink, empty_extractor());
        let (summary, reason) = uc.execute().unwrap();

        assert_eq!(reason, StopReason::SourceExhausted);
        assert_eq!(summary.frames, 0);
        assert_eq!(*shown.borrow(), 0);
    }
}
