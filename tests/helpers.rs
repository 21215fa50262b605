// Shared test helpers: a local UDP DNS responder and resolvers pointed at it.
//
// Each responder answers every question the same way, so a test picks the
// behaviour it wants to observe and points a fresh resolver at it.

use std::net::SocketAddr;
use std::time::Duration;

use hickory_resolver::config::{NameServerConfig, Protocol, ResolverConfig, ResolverOpts};
use hickory_resolver::proto::op::{Message, MessageType, ResponseCode};
use hickory_resolver::proto::rr::rdata::SOA;
use hickory_resolver::proto::rr::{Name, RData, Record};
use hickory_resolver::TokioAsyncResolver;
use tokio::net::UdpSocket;

use tld_check::initialization::init_resolver_with;

/// How the mock nameserver answers.
#[allow(dead_code)] // Not every test file uses every reply
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    /// NOERROR with one SOA record for the question name
    Soa,
    /// The given response code and an empty answer section
    Code(ResponseCode),
    /// Never answer
    Silent,
}

/// Starts a mock nameserver on a random localhost port.
pub async fn spawn_mock_server(reply: Reply) -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock DNS socket");
    let addr = socket.local_addr().expect("Mock socket has no address");

    tokio::spawn(async move {
        let mut buf = [0u8; 512];
        loop {
            let Ok((len, peer)) = socket.recv_from(&mut buf).await else {
                break;
            };
            let Ok(request) = Message::from_vec(&buf[..len]) else {
                continue;
            };
            if let Some(response) = build_response(&request, reply) {
                let bytes = response.to_vec().expect("Failed to encode mock response");
                let _ = socket.send_to(&bytes, peer).await;
            }
        }
    });

    addr
}

fn build_response(request: &Message, reply: Reply) -> Option<Message> {
    let mut response = Message::new();
    response
        .set_id(request.id())
        .set_message_type(MessageType::Response)
        .set_op_code(request.op_code())
        .set_recursion_desired(request.recursion_desired())
        .set_recursion_available(true)
        .add_queries(request.queries().to_vec());

    match reply {
        Reply::Silent => return None,
        Reply::Soa => {
            response
                .set_response_code(ResponseCode::NoError)
                .set_authoritative(true);
            for query in request.queries() {
                response.add_answer(soa_record(query.name().clone()));
            }
        }
        Reply::Code(code) => {
            response.set_response_code(code);
        }
    }

    Some(response)
}

fn soa_record(owner: Name) -> Record {
    let soa = SOA::new(
        Name::from_ascii("a.nic.test.").expect("valid mname"),
        Name::from_ascii("hostmaster.nic.test.").expect("valid rname"),
        2024010101,
        1800,
        900,
        604800,
        86400,
    );
    Record::from_rdata(owner, 3600, RData::SOA(soa))
}

/// Creates a resolver that only talks to `addr` over UDP, with one short attempt.
pub fn create_test_resolver(addr: SocketAddr) -> TokioAsyncResolver {
    let mut config = ResolverConfig::new();
    config.add_name_server(NameServerConfig::new(addr, Protocol::Udp));

    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(1);
    opts.attempts = 1;

    init_resolver_with(config, opts).expect("Mock resolver configuration should be usable")
}
