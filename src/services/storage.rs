// src/services/storage.rs

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::{common::error::AppError, models::uploads::SignedUrlResponse};

type HmacSha256 = Hmac<Sha256>;

const PRESIGN_EXPIRY_SECS: u32 = 3600;

// Gera URLs de upload pré-assinadas (SigV4, query string) para um
// bucket compatível com S3/R2. O serviço remoto faz o resto; aqui só
// assinamos a requisição PUT que o navegador vai executar.
#[derive(Clone)]
pub struct StorageService {
    endpoint: String,
    region: String,
    access_key_id: String,
    secret_access_key: String,
    bucket: String,
    public_domain: Option<String>,
}

impl StorageService {
    pub fn from_env() -> Self {
        let account_id = std::env::var("STORAGE_ACCOUNT_ID").ok();
        let endpoint = std::env::var("STORAGE_ENDPOINT")
            .ok()
            .or_else(|| account_id.map(|id| format!("https://{id}.r2.cloudflarestorage.com")))
            .unwrap_or_default();

        if endpoint.is_empty() {
            tracing::error!(
                "Endpoint de armazenamento ausente. Defina STORAGE_ENDPOINT ou STORAGE_ACCOUNT_ID."
            );
        }

        Self {
            endpoint,
            region: std::env::var("STORAGE_REGION").unwrap_or_else(|_| "auto".into()),
            access_key_id: std::env::var("STORAGE_ACCESS_KEY_ID").unwrap_or_default(),
            secret_access_key: std::env::var("STORAGE_SECRET_ACCESS_KEY").unwrap_or_default(),
            bucket: std::env::var("STORAGE_BUCKET").unwrap_or_else(|_| "tetraoil-bucket".into()),
            public_domain: std::env::var("STORAGE_PUBLIC_DOMAIN").ok(),
        }
    }

    pub fn generate_upload_url(
        &self,
        file_name: &str,
        file_type: &str,
    ) -> Result<SignedUrlResponse, AppError> {
        self.generate_upload_url_at(file_name, file_type, Utc::now())
    }

    // Variante com o instante explícito, para a assinatura ser verificável
    // em teste.
    pub fn generate_upload_url_at(
        &self,
        file_name: &str,
        file_type: &str,
        now: DateTime<Utc>,
    ) -> Result<SignedUrlResponse, AppError> {
        // Nome único e sem caracteres problemáticos, para evitar colisões.
        let key = format!("{}-{}", now.timestamp_millis(), sanitize_file_name(file_name));

        let host = self
            .endpoint
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/');

        let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
        let datestamp = now.format("%Y%m%d").to_string();
        let scope = format!("{datestamp}/{}/s3/aws4_request", self.region);
        let credential = format!("{}/{scope}", self.access_key_id);

        // Parâmetros de query em ordem lexicográfica, como o cânone exige.
        let query = format!(
            "X-Amz-Algorithm=AWS4-HMAC-SHA256\
             &X-Amz-Credential={}\
             &X-Amz-Date={amz_date}\
             &X-Amz-Expires={PRESIGN_EXPIRY_SECS}\
             &X-Amz-SignedHeaders=content-type%3Bhost",
            uri_encode(&credential),
        );

        let canonical_uri = format!("/{}/{key}", self.bucket);
        let canonical_request = format!(
            "PUT\n{canonical_uri}\n{query}\n\
             content-type:{file_type}\nhost:{host}\n\n\
             content-type;host\nUNSIGNED-PAYLOAD"
        );

        let string_to_sign = format!(
            "AWS4-HMAC-SHA256\n{amz_date}\n{scope}\n{}",
            hex::encode(Sha256::digest(canonical_request.as_bytes()))
        );

        let signature = self.sign(&datestamp, &string_to_sign)?;

        let upload_url = format!(
            "https://{host}{canonical_uri}?{query}&X-Amz-Signature={signature}"
        );

        let public_url = match &self.public_domain {
            Some(domain) => format!("{}/{key}", domain.trim_end_matches('/')),
            None => format!("https://{}.r2.dev/{key}", self.bucket),
        };

        Ok(SignedUrlResponse {
            upload_url,
            public_url,
        })
    }

    // Cadeia de derivação de chave do SigV4.
    fn sign(&self, datestamp: &str, string_to_sign: &str) -> Result<String, AppError> {
        let secret = format!("AWS4{}", self.secret_access_key);
        let date_key = hmac_sha256(secret.as_bytes(), datestamp.as_bytes())?;
        let region_key = hmac_sha256(&date_key, self.region.as_bytes())?;
        let service_key = hmac_sha256(&region_key, b"s3")?;
        let signing_key = hmac_sha256(&service_key, b"aws4_request")?;
        let signature = hmac_sha256(&signing_key, string_to_sign.as_bytes())?;
        Ok(hex::encode(signature))
    }
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>, AppError> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| anyhow::anyhow!("Chave HMAC inválida: {}", e))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

// Troca tudo fora de [A-Za-z0-9.-] por '_', como o portal sempre fez.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
        .collect()
}

// Percent-encoding no dialeto do SigV4: só caracteres não reservados
// ficam como estão.
fn uri_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn service() -> StorageService {
        StorageService {
            endpoint: "https://conta.r2.cloudflarestorage.com".into(),
            region: "auto".into(),
            access_key_id: "AKIATESTE".into(),
            secret_access_key: "segredo".into(),
            bucket: "tetraoil-bucket".into(),
            public_domain: None,
        }
    }

    #[test]
    fn sanitizes_file_names() {
        assert_eq!(
            sanitize_file_name("nota fiscal (2).pdf"),
            "nota_fiscal__2_.pdf"
        );
        assert_eq!(sanitize_file_name("já-ok.png"), "j_-ok.png");
    }

    #[test]
    fn signed_url_carries_the_sigv4_parameters() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();
        let signed = service()
            .generate_upload_url_at("comprovante.pdf", "application/pdf", now)
            .unwrap();

        assert!(signed.upload_url.starts_with(
            "https://conta.r2.cloudflarestorage.com/tetraoil-bucket/"
        ));
        assert!(signed.upload_url.contains("X-Amz-Algorithm=AWS4-HMAC-SHA256"));
        assert!(signed.upload_url.contains("X-Amz-Date=20260830T120000Z"));
        assert!(signed.upload_url.contains("X-Amz-Expires=3600"));
        assert!(signed.upload_url.contains("X-Amz-Credential=AKIATESTE%2F20260830%2Fauto%2Fs3%2Faws4_request"));
        assert!(signed.upload_url.contains("X-Amz-Signature="));
    }

    #[test]
    fn key_is_prefixed_with_timestamp_millis() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();
        let signed = service()
            .generate_upload_url_at("foto.png", "image/png", now)
            .unwrap();

        let expected_key = format!("{}-foto.png", now.timestamp_millis());
        assert!(signed.upload_url.contains(&expected_key));
        assert_eq!(
            signed.public_url,
            format!("https://tetraoil-bucket.r2.dev/{expected_key}")
        );
    }

    #[test]
    fn public_domain_overrides_the_fallback() {
        let mut svc = service();
        svc.public_domain = Some("https://arquivos.tetraoil.com.br/".into());

        let now = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();
        let signed = svc
            .generate_upload_url_at("foto.png", "image/png", now)
            .unwrap();

        assert!(signed
            .public_url
            .starts_with("https://arquivos.tetraoil.com.br/"));
    }

    #[test]
    fn signature_is_deterministic_for_a_fixed_instant() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();
        let a = service()
            .generate_upload_url_at("a.txt", "text/plain", now)
            .unwrap();
        let b = service()
            .generate_upload_url_at("a.txt", "text/plain", now)
            .unwrap();

        assert_eq!(a.upload_url, b.upload_url);
    }
}
