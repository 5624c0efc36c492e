use anyhow::{Context, Result};
use petmap_application::{Gateways, MapUseCase};
use petmap_core::auth::SessionCredentials;
use petmap_core::marker::{Marker, Position};
use petmap_core::point::NewPointRequest;
use petmap_infrastructure::load_image_attachment;
use std::path::PathBuf;

/// Values of the `points add` form.
pub struct NewPointInput {
    pub lat: f64,
    pub lng: f64,
    pub description: String,
    pub color: Option<String>,
    pub image: Option<PathBuf>,
}

pub async fn list(
    gateways: &Gateways,
    credentials: &SessionCredentials,
    mine: bool,
    json: bool,
) -> Result<()> {
    let mut map = MapUseCase::new(gateways.points());
    map.load_markers(credentials)
        .await
        .context("Failed to load points")?;

    let markers: Vec<&Marker> = if mine {
        map.my_pets().collect()
    } else {
        map.markers().iter().collect()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&markers)?);
    } else {
        print_markers(&markers);
    }
    Ok(())
}

pub async fn add(
    gateways: &Gateways,
    credentials: &SessionCredentials,
    input: NewPointInput,
) -> Result<()> {
    let position = Position::new(input.lat, input.lng)?;
    let mut request = NewPointRequest::new(position, input.description);
    if let Some(color) = input.color {
        request = request.with_color(color);
    }
    if let Some(path) = &input.image {
        let image = load_image_attachment(path)
            .await
            .with_context(|| format!("Failed to read image {}", path.display()))?;
        request = request.with_image(image);
    }

    let mut map = MapUseCase::new(gateways.points());
    // A failed initial load leaves the map empty but does not block reporting.
    if let Err(e) = map.load_markers(credentials).await {
        tracing::warn!("Continuing with an empty map: {}", e);
    }

    let marker = map
        .save_point(credentials, request)
        .await
        .context("Failed to save point")?;

    println!("Saved pet {}", marker.id);
    print_markers(&[&marker]);
    println!("{} markers on the map now", map.markers().len());
    Ok(())
}

fn print_markers(markers: &[&Marker]) {
    if markers.is_empty() {
        println!("No pets reported yet.");
        return;
    }
    for marker in markers {
        let mine = if marker.is_my_pet { " (mine)" } else { "" };
        println!(
            "[{}] {}{}\n    {}  color {}",
            marker.id, marker.title, mine, marker.position, marker.color
        );
        if let Some(url) = &marker.image_url {
            println!("    image {}", url);
        }
    }
}
