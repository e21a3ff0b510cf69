use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use ayat_wallpaper::{DatasetError, DatasetProvider, Edition, HttpProvider};

/// Answers each incoming connection with the next canned status line.
fn serve(statuses: &'static [&'static str]) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}/v1/quran", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        for status in statuses {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let body = "{}";
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        }
    });

    (base, handle)
}

fn provider(base: &str) -> HttpProvider {
    let client = reqwest::blocking::Client::builder().no_proxy().build().unwrap();
    HttpProvider::with_client(client, base)
}

#[test]
fn not_found_maps_to_provider_unavailable() {
    let (base, server) = serve(&["404 Not Found"]);
    let err = provider(&base).fetch(Edition::Arabic).unwrap_err();
    server.join().unwrap();

    match err {
        DatasetError::ProviderUnavailable { edition, url } => {
            assert_eq!(edition, Edition::Arabic);
            assert_eq!(url, format!("{base}/quran-uthmani"));
        }
        other => panic!("expected ProviderUnavailable, got {other:?}"),
    }
}

#[test]
fn server_error_maps_to_transport() {
    let (base, server) = serve(&["500 Internal Server Error"]);
    let err = provider(&base).fetch(Edition::English).unwrap_err();
    server.join().unwrap();

    match err {
        DatasetError::Transport { edition, message } => {
            assert_eq!(edition, Edition::English);
            assert!(message.contains("500"), "{message}");
        }
        other => panic!("expected Transport, got {other:?}"),
    }
}

#[test]
fn success_returns_body_bytes() {
    let (base, server) = serve(&["200 OK"]);
    let body = provider(&base).fetch(Edition::English).unwrap();
    server.join().unwrap();

    assert_eq!(body, b"{}");
}
