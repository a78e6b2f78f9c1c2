use std::io::{self, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use micro_http_head::codec::RequestDecoder;
use micro_http_head::protocol::RequestHead;
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!(port = 8080, "start listening");
    let tcp_listener = match TcpListener::bind("127.0.0.1:8080") {
        Ok(tcp_listener) => tcp_listener,
        Err(e) => {
            error!(cause = %e, "bind server error");
            return;
        }
    };

    for stream in tcp_listener.incoming() {
        let tcp_stream = match stream {
            Ok(tcp_stream) => tcp_stream,
            Err(e) => {
                warn!(cause = %e, "failed to accept");
                continue;
            }
        };

        thread::spawn(move || match process(tcp_stream) {
            Ok(()) => info!("finished process, connection shutdown"),
            Err(e) => error!("service has error, cause {}, connection shutdown", e),
        });
    }
}

fn process(tcp_stream: TcpStream) -> io::Result<()> {
    let mut writer = tcp_stream.try_clone()?;
    let mut decoder = RequestDecoder::new(tcp_stream);

    loop {
        match decoder.next_request() {
            Ok(Some(head)) => {
                let keep_alive = head.keep_alive();
                hello_world(&head, &mut writer, keep_alive)?;
                if !keep_alive {
                    return Ok(());
                }
            }
            Ok(None) => {
                info!("cant read more request, break this connection down");
                return Ok(());
            }
            Err(e) => {
                error!("can't receive next request, cause {}", e);
                writer.write_all(b"HTTP/1.1 400 Bad Request\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")?;
                return Ok(());
            }
        }
    }
}

fn hello_world(head: &RequestHead, writer: &mut TcpStream, keep_alive: bool) -> io::Result<()> {
    info!(method = head.method(), path = head.path(), "receive request");

    let body = "Hello World!\r\n";
    let connection = if keep_alive { "keep-alive" } else { "close" };
    write!(writer, "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: {}\r\n\r\n{}", body.len(), connection, body)?;
    writer.flush()
}
