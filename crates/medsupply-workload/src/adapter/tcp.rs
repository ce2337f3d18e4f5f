// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::{io, net::SocketAddr, time::Duration};

use bytes::Bytes;
use futures::{sink::SinkExt, stream::StreamExt};
use tokio::{net::TcpStream, sync::Mutex, time::sleep};
use tokio_util::codec::{Framed, LengthDelimitedCodec};

use super::SutAdapter;
use crate::transaction::ContractRequest;

#[derive(thiserror::Error, Debug)]
pub enum TcpAdapterError {
    #[error("Network error: {0}")]
    Io(#[from] io::Error),
    #[error("Cannot serialize request: {0}")]
    Serialization(#[from] bincode::Error),
    #[error("Connection closed by the gateway before replying")]
    ConnectionClosed,
}

/// An adapter that submits requests to a ledger gateway over TCP. Every request is sent as a
/// length-delimited bincode frame and answered by exactly one reply frame, which is handed
/// back to the caller as is.
pub struct TcpAdapter {
    /// The address of the gateway.
    address: SocketAddr,
    /// The connection to the gateway. Requests are serialized over it one at a time.
    connection: Mutex<Framed<TcpStream, LengthDelimitedCodec>>,
}

impl TcpAdapter {
    /// The maximum size of a network message.
    const MAX_MESSAGE_SIZE: usize = 16 * 1024 * 1024;
    /// The delay between two connection attempts.
    const RETRY_DELAY: Duration = Duration::from_secs(1);

    /// Connect to the gateway, retrying until it accepts the connection.
    pub async fn connect(address: SocketAddr) -> io::Result<Self> {
        tracing::info!("Trying to connect to gateway {address}");
        let stream = loop {
            match TcpStream::connect(address).await {
                Ok(stream) => break stream,
                Err(e) => {
                    tracing::info!("Failed to connect to gateway (retrying): {e}");
                    sleep(Self::RETRY_DELAY).await;
                }
            }
        };
        stream.set_nodelay(true)?;
        tracing::info!("Connected to {address}");

        let connection = LengthDelimitedCodec::builder()
            .max_frame_length(Self::MAX_MESSAGE_SIZE)
            .new_framed(stream);
        Ok(Self {
            address,
            connection: Mutex::new(connection),
        })
    }

    pub fn address(&self) -> SocketAddr {
        self.address
    }
}

impl SutAdapter for TcpAdapter {
    type Receipt = Bytes;
    type Error = TcpAdapterError;

    async fn send_request(&self, request: ContractRequest) -> Result<Bytes, TcpAdapterError> {
        let serialized = bincode::serialize(&request)?;

        let mut connection = self.connection.lock().await;
        connection.send(Bytes::from(serialized)).await?;
        match connection.next().await {
            Some(Ok(reply)) => Ok(reply.freeze()),
            Some(Err(e)) => Err(e.into()),
            None => Err(TcpAdapterError::ConnectionClosed),
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::{sink::SinkExt, stream::StreamExt};
    use tokio::{net::TcpListener, task::JoinHandle};
    use tokio_util::codec::{Framed, LengthDelimitedCodec};

    use super::*;

    fn request() -> ContractRequest {
        ContractRequest {
            contract_id: "abc123".to_string(),
            contract_function: "Issue".to_string(),
            invoker_identity: "alice".to_string(),
            contract_arguments: vec!["aspirin".to_string(), "0_0_0_0".to_string()],
            read_only: false,
        }
    }

    /// Create a gateway that answers `replies` requests and returns the requests it received.
    async fn gateway(replies: usize) -> (SocketAddr, JoinHandle<Vec<ContractRequest>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            let mut transport = Framed::new(socket, LengthDelimitedCodec::new());
            let mut received = Vec::new();
            for _ in 0..replies {
                let frame = transport.next().await.unwrap().unwrap();
                let request: ContractRequest = bincode::deserialize(&frame).unwrap();
                received.push(request);
                transport.send(Bytes::from("Ack")).await.unwrap();
            }
            received
        });
        (address, handle)
    }

    #[tokio::test]
    async fn submit_requests() {
        let (address, handle) = gateway(2).await;
        let adapter = TcpAdapter::connect(address).await.unwrap();
        assert_eq!(adapter.address(), address);

        let receipt = adapter.send_request(request()).await.unwrap();
        assert_eq!(receipt, Bytes::from("Ack"));
        let receipt = adapter.send_request(request()).await.unwrap();
        assert_eq!(receipt, Bytes::from("Ack"));

        let received = handle.await.unwrap();
        assert_eq!(received, vec![request(), request()]);
    }

    #[tokio::test]
    async fn gateway_closes_connection() {
        let (address, handle) = gateway(0).await;
        let adapter = TcpAdapter::connect(address).await.unwrap();
        handle.await.unwrap();

        let result = adapter.send_request(request()).await;
        assert!(matches!(
            result,
            Err(TcpAdapterError::ConnectionClosed) | Err(TcpAdapterError::Io(_))
        ));
    }
}
