//! The embedded single-page UI.
//!
//! Served as one static string from `/`. The page mints a session id on
//! first load, keeps it in `sessionStorage`, and sends it with every API
//! call so the server can scope the audit counter to this session.

/// The whole front-end.
pub const PAGE: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Vibe-Check Pro</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            display: flex;
            align-items: flex-start;
            justify-content: center;
            padding: 20px;
            gap: 20px;
        }

        .sidebar {
            background: white;
            border-radius: 20px;
            box-shadow: 0 20px 60px rgba(0,0,0,0.3);
            width: 280px;
            padding: 30px;
            flex-shrink: 0;
        }

        .sidebar h2 {
            color: #333;
            font-size: 1.2em;
            margin-bottom: 20px;
        }

        .metric {
            background: #f8f9ff;
            border-radius: 10px;
            padding: 15px;
            margin-bottom: 20px;
        }

        .metric-label {
            color: #666;
            font-size: 0.8em;
            text-transform: uppercase;
            letter-spacing: 1px;
        }

        .metric-value {
            color: #667eea;
            font-size: 2.2em;
            font-weight: 700;
        }

        .sidebar-note {
            background: #eef4ff;
            border-left: 4px solid #667eea;
            border-radius: 6px;
            padding: 12px;
            color: #444;
            font-size: 0.85em;
            line-height: 1.5;
            margin-bottom: 15px;
        }

        .sidebar-footer {
            border-top: 1px solid #e0e0e0;
            padding-top: 15px;
            color: #666;
            font-size: 0.85em;
        }

        .container {
            background: white;
            border-radius: 20px;
            box-shadow: 0 20px 60px rgba(0,0,0,0.3);
            max-width: 800px;
            width: 100%;
            padding: 40px;
        }

        h1 {
            color: #333;
            margin-bottom: 10px;
            font-size: 2em;
        }

        .subtitle {
            color: #666;
            margin-bottom: 30px;
            font-size: 0.9em;
        }

        .upload-area {
            border: 3px dashed #667eea;
            border-radius: 15px;
            padding: 60px 20px;
            text-align: center;
            cursor: pointer;
            transition: all 0.3s;
            background: #f8f9ff;
        }

        .upload-area:hover {
            border-color: #764ba2;
            background: #f0f2ff;
        }

        .upload-area.dragover {
            border-color: #764ba2;
            background: #e8ebff;
            transform: scale(1.02);
        }

        .upload-icon {
            font-size: 4em;
            margin-bottom: 20px;
        }

        .upload-text {
            color: #667eea;
            font-size: 1.2em;
            font-weight: 600;
            margin-bottom: 10px;
        }

        .upload-hint {
            color: #999;
            font-size: 0.9em;
        }

        input[type="file"] {
            display: none;
        }

        .preview-container {
            margin-top: 30px;
            display: none;
        }

        .preview-image {
            max-width: 100%;
            border-radius: 10px;
            margin-bottom: 10px;
            box-shadow: 0 4px 15px rgba(0,0,0,0.1);
        }

        .preview-caption {
            color: #999;
            font-size: 0.85em;
            text-align: center;
            margin-bottom: 20px;
        }

        .generate-btn {
            width: 100%;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            border: none;
            border-radius: 10px;
            padding: 16px;
            font-size: 1.1em;
            font-weight: 600;
            cursor: pointer;
            transition: opacity 0.3s;
        }

        .generate-btn:disabled {
            opacity: 0.4;
            cursor: not-allowed;
        }

        .result {
            background: #f8f9ff;
            border-radius: 10px;
            padding: 20px;
            margin-top: 20px;
            display: none;
        }

        .result-label {
            color: #667eea;
            font-weight: 600;
            margin-bottom: 10px;
            font-size: 0.9em;
            text-transform: uppercase;
            letter-spacing: 1px;
        }

        .result-text {
            color: #333;
            font-size: 1em;
            line-height: 1.6;
            white-space: pre-wrap;
        }

        .result.success {
            background: #f0fff4;
            border: 1px solid #9ae6b4;
        }

        .meta-info {
            display: flex;
            justify-content: space-between;
            margin-top: 15px;
            padding-top: 15px;
            border-top: 1px solid #e0e0e0;
            font-size: 0.85em;
            color: #666;
        }

        .loading {
            text-align: center;
            padding: 40px;
            display: none;
        }

        .spinner {
            border: 4px solid #f3f3f3;
            border-top: 4px solid #667eea;
            border-radius: 50%;
            width: 50px;
            height: 50px;
            animation: spin 1s linear infinite;
            margin: 0 auto 20px;
        }

        @keyframes spin {
            0% { transform: rotate(0deg); }
            100% { transform: rotate(360deg); }
        }

        .error {
            background: #fee;
            border: 2px solid #fcc;
            color: #c33;
            padding: 15px;
            border-radius: 10px;
            margin-top: 20px;
            display: none;
        }
    </style>
</head>
<body>
    <div class="sidebar">
        <h2>🏢 Enterprise Dashboard</h2>
        <div class="metric">
            <div class="metric-label">Total Audits Done</div>
            <div class="metric-value" id="auditCount">0</div>
        </div>
        <div class="sidebar-note">
            <strong>Architecture:</strong> Multi-Modal Agentic Workflow (Rust-Native)
        </div>
        <div class="sidebar-footer">
            Logged in as: <strong>Professional Brand Strategist</strong>
        </div>
    </div>

    <div class="container">
        <h1>✨ Vibe-Check: Enterprise Multi-Agent</h1>
        <p class="subtitle">Automated Brand DNA with <strong>Gemini 3-flash-preview</strong> &amp; <strong>Llama 3.3 (via Groq)</strong></p>

        <div class="upload-area" id="uploadArea">
            <div class="upload-icon">📸</div>
            <div class="upload-text">Upload Brand Image</div>
            <div class="upload-hint">Supports JPG, PNG, WebP • Max 10MB</div>
            <input type="file" id="fileInput" accept="image/jpeg,image/png,image/webp">
        </div>

        <div class="preview-container" id="previewContainer">
            <img id="previewImage" class="preview-image" alt="Client Sample">
            <div class="preview-caption">Client Sample</div>
            <button class="generate-btn" id="generateBtn" disabled>Generate Professional Audit</button>
        </div>

        <div class="loading" id="loading">
            <div class="spinner"></div>
            <p id="loadingText">🧬 Agent 1: Extracting Visual DNA...</p>
        </div>

        <div class="error" id="error"></div>

        <div class="result" id="dnaResult">
            <div class="result-label">🧪 Phase 1: Visual DNA (Gemini)</div>
            <div class="result-text" id="dnaText"></div>
        </div>

        <div class="result success" id="copyResult">
            <div class="result-label">💡 Phase 2: Creative Ad Hooks (Groq)</div>
            <div class="result-text" id="copyText"></div>
            <div class="meta-info" id="metaInfo">
                <span>Processing: <strong id="processingTime">--</strong>ms</span>
            </div>
        </div>
    </div>

    <script>
        const uploadArea = document.getElementById('uploadArea');
        const fileInput = document.getElementById('fileInput');
        const previewContainer = document.getElementById('previewContainer');
        const previewImage = document.getElementById('previewImage');
        const generateBtn = document.getElementById('generateBtn');
        const loading = document.getElementById('loading');
        const loadingText = document.getElementById('loadingText');
        const errorDiv = document.getElementById('error');
        const dnaResult = document.getElementById('dnaResult');
        const dnaText = document.getElementById('dnaText');
        const copyResult = document.getElementById('copyResult');
        const copyText = document.getElementById('copyText');
        const processingTime = document.getElementById('processingTime');
        const auditCount = document.getElementById('auditCount');

        let sessionId = sessionStorage.getItem('vibe-session-id');
        if (!sessionId) {
            sessionId = crypto.randomUUID();
            sessionStorage.setItem('vibe-session-id', sessionId);
        }

        function showError(message) {
            errorDiv.textContent = 'System Error: ' + message;
            errorDiv.style.display = 'block';
        }

        function clearResults() {
            errorDiv.style.display = 'none';
            dnaResult.style.display = 'none';
            copyResult.style.display = 'none';
        }

        async function refreshSidebar() {
            try {
                const response = await fetch('/api/session', {
                    headers: { 'x-session-id': sessionId }
                });
                if (response.ok) {
                    const status = await response.json();
                    auditCount.textContent = status.completed_audits;
                }
            } catch (_) {
                // sidebar metric is best-effort
            }
        }

        uploadArea.addEventListener('click', () => fileInput.click());

        uploadArea.addEventListener('dragover', (e) => {
            e.preventDefault();
            uploadArea.classList.add('dragover');
        });

        uploadArea.addEventListener('dragleave', () => {
            uploadArea.classList.remove('dragover');
        });

        uploadArea.addEventListener('drop', (e) => {
            e.preventDefault();
            uploadArea.classList.remove('dragover');
            const file = e.dataTransfer.files[0];
            if (file) {
                handleFile(file);
            }
        });

        fileInput.addEventListener('change', (e) => {
            const file = e.target.files[0];
            if (file) {
                handleFile(file);
            }
        });

        async function handleFile(file) {
            clearResults();
            generateBtn.disabled = true;

            const formData = new FormData();
            formData.append('image', file);

            try {
                const response = await fetch('/api/upload', {
                    method: 'POST',
                    headers: { 'x-session-id': sessionId },
                    body: formData
                });

                const result = await response.json();
                if (!response.ok) {
                    throw new Error(result.error || 'Upload failed');
                }

                const reader = new FileReader();
                reader.onload = (e) => {
                    previewImage.src = e.target.result;
                };
                reader.readAsDataURL(file);

                previewContainer.style.display = 'block';
                generateBtn.disabled = false;

            } catch (error) {
                showError(error.message);
            }
        }

        generateBtn.addEventListener('click', async () => {
            clearResults();
            generateBtn.disabled = true;
            loading.style.display = 'block';
            loadingText.textContent = '🧬 Agent 1: Extracting Visual DNA...';

            // Approximates the original's two sequential spinners; the
            // server does not stream stage boundaries.
            const captionTimer = setTimeout(() => {
                loadingText.textContent = '👂 Agent 2: Crafting Creative Strategy...';
            }, 2500);

            try {
                const response = await fetch('/api/generate', {
                    method: 'POST',
                    headers: { 'x-session-id': sessionId }
                });

                const result = await response.json();
                if (!response.ok) {
                    throw new Error(result.error || 'Audit failed');
                }

                dnaText.textContent = result.dna_report;
                dnaResult.style.display = 'block';
                copyText.textContent = result.ad_copy;
                copyResult.style.display = 'block';
                processingTime.textContent = result.processing_time_ms;
                auditCount.textContent = result.completed_audits;

            } catch (error) {
                showError(error.message);
            } finally {
                clearTimeout(captionTimer);
                loading.style.display = 'none';
                generateBtn.disabled = false;
            }
        });

        refreshSidebar();
    </script>
</body>
</html>
"#;
