use petmap_core::user::UserProfile;

pub fn show(email: &str, description: &str, show_email: bool) {
    let profile = UserProfile::new(email).with_description(description);
    let shown = if show_email {
        profile.email.clone()
    } else {
        profile.masked_email()
    };

    println!("MY ACCOUNT");
    println!("  email: {}", shown);
    if !profile.description.is_empty() {
        println!("  about: {}", profile.description);
    }
}
