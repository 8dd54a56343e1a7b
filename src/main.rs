use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use socket2::{Domain, Protocol, Socket, Type};
use std::sync::Arc;
use tokio::net::TcpListener;

mod api;
mod browser;
mod config;
mod handler;
mod logger;
mod signal;
mod store;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let port = match parse_port_arg(std::env::args().nth(1)) {
        Ok(port) => port,
        Err(message) => {
            eprintln!("Error: {message}");
            std::process::exit(1);
        }
    };

    let mut settings = config::Settings::load()?;
    if let Some(port) = port {
        settings.server.port = port;
    }

    // One request is fully handled before the next is accepted, so a
    // current-thread runtime is all this server needs
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run(settings))
}

/// Parse the optional positional port argument
fn parse_port_arg(arg: Option<String>) -> Result<Option<u16>, String> {
    match arg {
        None => Ok(None),
        Some(raw) => raw
            .parse::<u16>()
            .map(Some)
            .map_err(|_| format!("invalid port number '{raw}'")),
    }
}

async fn run(settings: config::Settings) -> Result<(), Box<dyn std::error::Error>> {
    let addr = settings.socket_addr()?;
    let listener = create_reusable_listener(addr)?;
    let state = Arc::new(config::AppState::new(settings));

    logger::log_server_start(&addr, &state.store.load());

    if state.settings.server.open_browser {
        browser::spawn_open(addr);
    }

    let shutdown = signal::ShutdownSignal::new();
    signal::spawn_listener(&shutdown);

    loop {
        if shutdown.is_requested() {
            break;
        }

        tokio::select! {
            accepted = listener.accept() => {
                match accepted {
                    Ok((stream, _peer_addr)) => serve_connection(stream, &state).await,
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            () = shutdown.notify.notified() => {
                break;
            }
        }
    }

    logger::log_shutdown();
    Ok(())
}

/// Serve a single connection to completion before accepting the next.
///
/// Keep-alive is disabled so a connection carries exactly one request and
/// the accept loop stays strictly sequential.
async fn serve_connection(stream: tokio::net::TcpStream, state: &Arc<config::AppState>) {
    let io = TokioIo::new(stream);
    let state = Arc::clone(state);

    let conn = http1::Builder::new().keep_alive(false).serve_connection(
        io,
        service_fn(move |req| {
            let state = Arc::clone(&state);
            async move { handler::handle_request(req, state).await }
        }),
    );

    if let Err(e) = conn.await {
        logger::log_error(&format!("Failed to serve connection: {e:?}"));
    }
}

/// Create a `TcpListener` with `SO_REUSEADDR` enabled (and `SO_REUSEPORT`
/// on Unix), so the server can rebind promptly after a restart.
fn create_reusable_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    #[cfg(unix)]
    socket.set_reuse_port(true)?;

    socket.set_reuse_address(true)?;

    // Non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
