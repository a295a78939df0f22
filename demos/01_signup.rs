use srp6a::*;
use zeroize::Zeroizing;

fn main() {
    // this is what a user would enter in a form / terminal
    let new_username = "Bob";
    let user_password = Zeroizing::new("secret-password".to_string());

    let params = SRPParameters::group_3072_sha512();
    let user_details =
        verifier::generate_user_details(&params, new_username, user_password).expect("valid credentials");
    assert_eq!(user_details.salt.num_bytes(), 16);
    assert_eq!(user_details.verifier.num_bytes(), 3072 / 8);

    println!("Simulating a server and signup with user {}", new_username);
    println!(" - User's username   [I] = {:?}", &user_details.username);
    println!(" - Salt              [s] = {:?}", &user_details.salt);
    println!(" - Password verifier [v] = {:?}", &user_details.verifier);
    println!("This is a one time action, normally this data is stored in a user database");
    println!();
    println!("Next authentication process `cargo run --example 02_authentication`");
}
