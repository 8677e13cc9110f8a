use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Terminal logging. Verbose mode shows each like request and its status.
pub fn init_cli_logger(verbose: bool) {
    let default_directives = if verbose {
        "warbler_ui=debug,reqwest=info,warn"
    } else {
        "warbler_ui=info,warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(verbose)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .ok();
}

/// Routes `tracing` output to the browser console.
#[cfg(feature = "web")]
pub fn init_web_logger() {
    let filter = EnvFilter::new("warbler_ui=debug");

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .without_time() // SystemTime is unavailable on wasm32
                .with_writer(console::ConsoleWriter::default)
                .compact(),
        )
        .try_init()
        .ok();
}

#[cfg(feature = "web")]
mod console {
    use std::io::{self, Write};

    /// Buffers one formatted event and hands it to `console.log` on drop.
    #[derive(Default)]
    pub struct ConsoleWriter {
        buf: Vec<u8>,
    }

    impl Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.buf.is_empty() {
                return Ok(());
            }
            let line = String::from_utf8_lossy(&self.buf);
            web_sys::console::log_1(&line.trim_end().into());
            self.buf.clear();
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let _ = self.flush();
        }
    }
}
