use srp6a::*;
use std::time::{Duration, Instant};
use zeroize::Zeroizing;

fn main() {
    let username = "Bob";
    let password = "secret-password";
    let params = SRPParameters::group_3072_sha512();

    // new user: those are sent to the server and stored there
    let user_details = verifier::generate_user_details(&params, username, Zeroizing::new(password.to_string()))
        .expect("valid credentials");

    let mut durations: Duration = Duration::default();
    #[cfg(debug_assertions)]
    const NLOOPS: u32 = 10;
    #[cfg(not(debug_assertions))]
    const NLOOPS: u32 = 100;

    for _ in 0..NLOOPS {
        let start = Instant::now();

        // user creates a handshake
        let client = SrpClient::new(params.clone())
            .step1(username.to_string(), Zeroizing::new(password.to_string()))
            .expect("valid credentials");

        // server retrieves stored details and continues the handshake
        let mut server = SrpServer::new(params.clone());
        let server_step1 = server
            .step1(&user_details, client.public_value().clone())
            .unwrap();

        // client side
        let client_step2 = client
            .step2(server_step1.salt.clone(), server_step1.server_public_value.clone())
            .unwrap();

        // server side
        let server_step2 = server
            .step2(server_step1.client_public_value(), client_step2.client_evidence())
            .expect("invalid client proof");

        // client side
        let client_step3 = client_step2
            .step3(server_step2.server_evidence())
            .expect("invalid server proof");

        assert_eq!(client_step3.session_key(), server_step2.session_key(), "not same session key");

        // now both sides can exchange encrypted messages over the channel
        let wire = client_step3.encrypt(b"hello, server");
        let plaintext = server_step2.decrypt(&wire).unwrap();
        assert_eq!(plaintext, b"hello, server");

        durations = durations.checked_add(start.elapsed()).unwrap();
    }

    println!("Time elapsed in auth is: {:?}", durations / NLOOPS);
}
