use js_sys::{ArrayBuffer, Uint8Array};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fetch `url` and resolve with the raw response body.
pub async fn fetch_array_buffer(url: &str) -> anyhow::Result<ArrayBuffer> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let opts = web::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web::RequestMode::SameOrigin);
    let request = web::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| anyhow::anyhow!("request {}: {:?}", url, e))?;

    let resp_val = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?;
    let resp: web::Response = resp_val
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("fetch {}: not a Response", url))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, resp.status());
    }

    let body = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow::anyhow!("read {}: {:?}", url, e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("read {}: {:?}", url, e))?;
    body.dyn_into::<ArrayBuffer>()
        .map_err(|_| anyhow::anyhow!("read {}: body is not an ArrayBuffer", url))
}

pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let buf = fetch_array_buffer(url).await?;
    Ok(Uint8Array::new(&buf).to_vec())
}

/// Fetch and decode an image into tightly packed RGBA8.
pub async fn load_texture_image(url: &str) -> anyhow::Result<image::RgbaImage> {
    let bytes = fetch_bytes(url).await?;
    let img = image::load_from_memory(&bytes)
        .map_err(|e| anyhow::anyhow!("decode {}: {}", url, e))?;
    Ok(img.to_rgba8())
}
