use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::{AcquireError, OwnedSemaphorePermit, Semaphore};
use tracing::{error, info, warn};

use crate::frontend::context::FrontendContext;
use crate::shared::config::ServerConfig;

use super::handler::handle_request;

pub async fn run_http_server(cfg: &ServerConfig, ctx: Arc<FrontendContext>) -> anyhow::Result<()> {
    let addr: SocketAddr = cfg.http_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;

    info!("HTTP server running at http://{addr}/");

    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
        }
    };
    serve(listener, cfg, ctx, ctrl_c).await
}

/// Accepts connections until `shutdown` resolves, including while every slot is taken.
pub async fn serve<F>(
    listener: TcpListener,
    cfg: &ServerConfig,
    ctx: Arc<FrontendContext>,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()>,
{
    let connection_semaphore = cfg
        .max_connections
        .filter(|max| *max > 0)
        .map(|max| Arc::new(Semaphore::new(max)));

    tokio::pin!(shutdown);

    loop {
        let permit = tokio::select! {
            permit = acquire_slot(connection_semaphore.as_ref()) => permit?,
            _ = &mut shutdown => {
                info!("HTTP server shutting down while waiting for a connection slot");
                break;
            }
        };

        let accept_result = tokio::select! {
            result = listener.accept() => result,
            _ = &mut shutdown => {
                info!("HTTP server shutting down, stopping accept loop");
                break;
            }
        };

        let (stream, _peer_addr) = match accept_result {
            Ok(stream) => stream,
            Err(e) => {
                warn!("Failed to accept HTTP connection: {}", e);
                continue;
            }
        };
        let io = TokioIo::new(stream);
        let ctx = Arc::clone(&ctx);
        let keep_alive = cfg.keep_alive;

        tokio::spawn(async move {
            let mut builder = hyper::server::conn::http1::Builder::new();
            builder.keep_alive(keep_alive);

            if let Err(err) = builder
                .serve_connection(
                    io,
                    service_fn(move |req| handle_request(req, Arc::clone(&ctx))),
                )
                .await
            {
                // Client hangups are routine
                if !err.is_incomplete_message() && !err.is_canceled() {
                    error!("Error serving connection: {:?}", err);
                }
            }
            drop(permit);
        });
    }

    info!("HTTP server shutdown complete");
    Ok(())
}

async fn acquire_slot(
    semaphore: Option<&Arc<Semaphore>>,
) -> Result<Option<OwnedSemaphorePermit>, AcquireError> {
    match semaphore {
        Some(semaphore) => Arc::clone(semaphore).acquire_owned().await.map(Some),
        None => Ok(None),
    }
}
