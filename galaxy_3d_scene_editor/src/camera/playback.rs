/// PathPlayer drives a CameraPath from a frame clock.
///
/// The caller feeds real elapsed seconds to `tick` and applies the returned
/// pose to its camera. The player owns its path snapshot; swapping in an
/// edited path keeps the playhead.

use crate::engine_debug;
use super::camera_path::CameraPath;
use super::camera_pose::CameraPathState;
use super::easing::Easing;

const SOURCE: &str = "galaxy3d::PathPlayer";

/// Transport state of a PathPlayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Playhead at 0, not advancing
    Stopped,
    /// Advancing on every tick
    Playing,
    /// Holding the current playhead
    Paused,
    /// Non-looping path reached its duration
    Finished,
}

/// Playback clock for one camera path.
#[derive(Debug, Clone)]
pub struct PathPlayer {
    path: CameraPath,
    /// Playhead in path seconds, kept within one loop on looping paths
    time: f32,
    /// Path seconds per real second
    speed: f32,
    easing: Easing,
    state: PlaybackState,
}

impl PathPlayer {
    /// Stopped player at time 0, speed 1, linear easing
    pub fn new(path: CameraPath) -> Self {
        Self {
            path,
            time: 0.0,
            speed: 1.0,
            easing: Easing::Linear,
            state: PlaybackState::Stopped,
        }
    }

    // ===== GETTERS =====

    pub fn path(&self) -> &CameraPath {
        &self.path
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    // ===== TRANSPORT =====

    /// Start or resume. A finished player restarts from 0.
    pub fn play(&mut self) {
        if self.state == PlaybackState::Finished {
            self.time = 0.0;
        }
        self.state = PlaybackState::Playing;
    }

    /// Hold the playhead. Only affects a playing player.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Stop and rewind to 0.
    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
        self.time = 0.0;
    }

    /// Move the playhead. Negative times clamp to 0; on a non-looping path
    /// times past the duration clamp to it, on a looping path they wrap.
    pub fn seek(&mut self, time: f32) {
        self.time = self.clamp_time(time);
        if self.state == PlaybackState::Finished && self.time < self.path.duration() {
            self.state = PlaybackState::Paused;
        }
    }

    /// Playback rate; negative values clamp to 0.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.max(0.0);
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Replace the path, keeping the playhead (clamped to the new path).
    pub fn set_path(&mut self, path: CameraPath) {
        self.path = path;
        self.time = self.clamp_time(self.time);
    }

    fn clamp_time(&self, time: f32) -> f32 {
        let time = time.max(0.0);
        let duration = self.path.duration();
        if self.path.is_looping() {
            if duration > 0.0 {
                time % duration
            } else {
                time
            }
        } else {
            time.min(duration.max(0.0))
        }
    }

    // ===== CLOCK =====

    /// Advance by `dt` real seconds and return the pose at the new playhead.
    pub fn tick(&mut self, dt: f32) -> CameraPathState {
        if self.state == PlaybackState::Playing {
            self.time += dt.max(0.0) * self.speed;

            let duration = self.path.duration();
            if !self.path.is_looping() && self.time >= duration {
                self.time = duration.max(0.0);
                self.state = PlaybackState::Finished;
                engine_debug!(SOURCE, "Finished playing '{}'", self.path.name());
            } else if self.path.is_looping() {
                self.time = self.clamp_time(self.time);
            }
        }
        self.pose()
    }

    /// Pose at the current playhead, with easing applied.
    pub fn pose(&self) -> CameraPathState {
        let duration = self.path.duration();
        if !(duration > 0.0) {
            return self.path.evaluate(self.time);
        }

        let local = if self.path.is_looping() {
            self.time % duration
        } else {
            self.time.min(duration)
        };
        let eased = self.easing.apply(local / duration) * duration;
        self.path.evaluate(eased)
    }
}

#[cfg(test)]
#[path = "playback_tests.rs"]
mod tests;
