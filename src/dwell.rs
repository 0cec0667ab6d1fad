// src/dwell.rs

/// Temporizador de un solo disparo para marcar un vídeo como visto.
///
/// El reloj lo pone quien llama (en la UI, `ctx.input(|i| i.time)`), así el
/// temporizador no depende de la plataforma. Vive lo mismo que la pantalla
/// del vídeo: al salir se cancela y ya no dispara.
#[derive(Debug, Clone, PartialEq)]
pub struct DwellTimer {
    video_id: String,
    deadline: f64,
    state: TimerState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Pending,
    Fired,
    Cancelled,
}

impl DwellTimer {
    pub fn start(video_id: impl Into<String>, now: f64, delay: f64) -> Self {
        let video_id = video_id.into();
        log::debug!("Temporizador de visionado para {video_id} ({delay}s)");
        Self {
            video_id,
            deadline: now + delay,
            state: TimerState::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state == TimerState::Pending
    }

    /// Devuelve el id del vídeo exactamente una vez, cuando vence el plazo
    pub fn poll(&mut self, now: f64) -> Option<&str> {
        if self.state != TimerState::Pending || now < self.deadline {
            return None;
        }
        self.state = TimerState::Fired;
        log::debug!("Vídeo {} marcado como visto", self.video_id);
        Some(&self.video_id)
    }

    pub fn cancel(&mut self) {
        if self.state == TimerState::Pending {
            log::debug!("Temporizador de {} cancelado", self.video_id);
            self.state = TimerState::Cancelled;
        }
    }

    /// Segundos que faltan; `None` si ya no está pendiente
    pub fn remaining(&self, now: f64) -> Option<f64> {
        self.is_pending().then(|| (self.deadline - now).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_delay() {
        let mut t = DwellTimer::start("1", 10.0, 3.0);
        assert_eq!(t.poll(11.0), None);
        assert_eq!(t.remaining(11.0), Some(2.0));
        assert_eq!(t.poll(13.0), Some("1"));
        assert_eq!(t.poll(20.0), None);
        assert!(!t.is_pending());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut t = DwellTimer::start("4", 0.0, 3.0);
        t.poll(1.0);
        t.cancel();
        assert_eq!(t.poll(100.0), None);
        assert_eq!(t.remaining(100.0), None);
    }

    #[test]
    fn cancel_after_firing_is_harmless() {
        let mut t = DwellTimer::start("2", 0.0, 0.5);
        assert!(t.poll(0.5).is_some());
        t.cancel();
        assert!(t.poll(1.0).is_none());
    }
}
