//! 터미널 지오메트리 기반 폭 탐지 어댑터.

use std::io::{self, IsTerminal};

use crossterm::terminal;

use crate::application::ports::WidthProbe;

/// stdout이 터미널일 때만 컬럼 수를 보고하는 탐지기.
pub struct TerminalWidthProbe;

impl WidthProbe for TerminalWidthProbe {
    fn probe_width(&self) -> Option<u32> {
        // 파이프/리다이렉션 환경에서는 탐지하지 않는다.
        if !io::stdout().is_terminal() {
            return None;
        }

        match terminal::size() {
            Ok((cols, _)) if cols > 0 => Some(u32::from(cols)),
            Ok(_) => None,
            Err(err) => {
                tracing::debug!("terminal size probe failed: {err}");
                None
            }
        }
    }
}
