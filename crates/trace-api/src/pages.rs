//! # Verification Page
//!
//! HTML rendering for the page a mobile device lands on after scanning a
//! product QR code. Fields are rendered verbatim from the resolved record.

use chrono::Utc;
use trace_core::{ProductRecord, VerificationUrls};

fn detail_row(label: &str, value: &str) -> String {
    format!(
        r#"<div class="detail-item"><span class="detail-label">{}</span><span class="detail-value">{}</span></div>"#,
        label, value
    )
}

/// Render the verification page for a resolved product record.
pub fn verification_page(record: &ProductRecord, urls: &VerificationUrls) -> String {
    let scanned_at = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    let server = format!("{}:{}", urls.host, urls.port);

    let product_rows = [
        detail_row("🏷️ Product ID:", &record.id),
        detail_row("🥗 Product Name:", &record.name),
        detail_row("👨‍🌾 Farmer:", &record.farmer),
        detail_row("📍 Origin:", &record.origin),
        detail_row("🗓️ Harvest Date:", &record.harvest_date),
        detail_row("⚖️ Quantity:", &record.quantity),
        detail_row("💰 Price:", &record.price),
        detail_row("🏅 Certification:", &record.quality_certification),
    ]
    .join("\n                ");

    let trace_rows = [
        detail_row("📱 Scanned At:", &scanned_at),
        detail_row("🖥️ Server:", &server),
        detail_row("🌐 Status:", "✅ Connected via WiFi"),
    ]
    .join("\n                ");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>FarmTrace - Product Verification</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 0;
            padding: 20px;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: #333;
            min-height: 100vh;
        }}
        .container {{
            background: white;
            padding: 25px;
            border-radius: 15px;
            box-shadow: 0 10px 30px rgba(0,0,0,0.2);
            max-width: 500px;
            margin: 0 auto;
        }}
        .qr-success {{
            background: linear-gradient(135deg, #4facfe 0%, #00f2fe 100%);
            color: white;
            padding: 15px;
            border-radius: 10px;
            margin-bottom: 25px;
            text-align: center;
            font-weight: bold;
        }}
        .verified-badge {{
            background: linear-gradient(135deg, #11998e 0%, #38ef7d 100%);
            color: white;
            padding: 12px 20px;
            border-radius: 25px;
            display: inline-block;
            font-weight: bold;
            margin-bottom: 20px;
        }}
        .header {{ text-align: center; margin-bottom: 25px; }}
        h1 {{ color: #333; margin: 0; font-size: 24px; }}
        .detail-item {{
            display: flex;
            justify-content: space-between;
            padding: 12px 0;
            border-bottom: 1px solid #f0f0f0;
        }}
        .detail-label {{ font-weight: bold; color: #555; min-width: 120px; }}
        .detail-value {{ color: #333; text-align: right; flex: 1; }}
        .trace-section {{
            background: #f8f9fa;
            padding: 20px;
            border-radius: 10px;
            margin: 20px 0;
        }}
        .footer {{
            margin-top: 30px;
            padding-top: 20px;
            border-top: 2px solid #f0f0f0;
            text-align: center;
            color: #666;
            font-size: 14px;
        }}
    </style>
</head>
<body>
    <div class="container">
        <div class="qr-success">✅ <strong>QR Code Successfully Scanned!</strong></div>

        <div class="header">
            <h1>🌾 FarmTrace Verification</h1>
            <div class="verified-badge">🔐 Product Verified</div>
        </div>

        <div class="product-info">
                {product_rows}
        </div>

        <div class="trace-section">
                {trace_rows}
        </div>

        <div class="footer">
            <strong>Powered by FarmTrace</strong><br>
            🛡️ Ensuring transparency from farm to consumer
        </div>
    </div>
</body>
</html>
"#
    )
}
