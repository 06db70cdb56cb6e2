use axum::response::Html;

const INDEX_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Eventory</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;
            background: #f5f7fa;
            min-height: 100vh;
            padding: 24px;
            color: #1a202c;
        }
        .container { max-width: 1100px; margin: 0 auto; }
        header {
            background: white;
            padding: 24px 32px;
            border-radius: 8px;
            box-shadow: 0 1px 3px rgba(0,0,0,0.06);
            margin-bottom: 24px;
            border: 1px solid #e2e8f0;
            display: flex;
            justify-content: space-between;
            align-items: center;
        }
        h1 {
            color: #2d3748;
            font-size: 24px;
            font-weight: 600;
            letter-spacing: -0.025em;
        }
        .subtitle { color: #718096; font-size: 14px; margin-top: 4px; }
        .user-box { display: flex; align-items: center; gap: 12px; }
        .user-name { font-size: 14px; color: #4a5568; font-weight: 500; }
        .stats-bar {
            display: flex;
            gap: 16px;
            margin-bottom: 24px;
        }
        .stat-card {
            background: white;
            border: 1px solid #e2e8f0;
            border-radius: 8px;
            padding: 16px 24px;
            flex: 1;
        }
        .stat-value { font-size: 22px; font-weight: 600; color: #2d3748; }
        .stat-label { font-size: 12px; color: #718096; text-transform: uppercase; letter-spacing: 0.05em; }
        .auth-panel {
            background: white;
            border: 1px solid #e2e8f0;
            border-radius: 8px;
            padding: 32px;
            max-width: 420px;
            margin: 48px auto;
            box-shadow: 0 1px 3px rgba(0,0,0,0.06);
        }
        .auth-panel h2 { font-size: 18px; color: #2d3748; margin-bottom: 16px; }
        .auth-toggle { font-size: 13px; color: #718096; margin-top: 16px; }
        .auth-toggle a { color: #3182ce; cursor: pointer; }
        .toolbar {
            background: white;
            border: 1px solid #e2e8f0;
            border-radius: 8px;
            padding: 16px;
            margin-bottom: 24px;
            display: flex;
            gap: 12px;
            flex-wrap: wrap;
            align-items: center;
        }
        input, select, textarea {
            border: 1px solid #cbd5e0;
            border-radius: 6px;
            padding: 8px 12px;
            font-size: 14px;
            font-family: inherit;
            color: #2d3748;
        }
        input:focus, select:focus, textarea:focus { outline: 2px solid #bee3f8; border-color: #3182ce; }
        .toolbar input[name=search] { flex: 1; min-width: 180px; }
        button {
            border: none;
            border-radius: 6px;
            padding: 9px 16px;
            font-size: 14px;
            font-weight: 500;
            cursor: pointer;
            background: #edf2f7;
            color: #2d3748;
        }
        button.primary { background: #3182ce; color: white; }
        button.danger { background: #fed7d7; color: #742a2a; }
        button:hover { filter: brightness(0.96); }
        .cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 16px; }
        .event-card {
            background: white;
            border: 1px solid #e2e8f0;
            border-radius: 8px;
            padding: 16px;
            box-shadow: 0 1px 3px rgba(0,0,0,0.06);
            display: flex;
            flex-direction: column;
            gap: 8px;
        }
        .event-name { font-size: 16px; font-weight: 600; color: #2d3748; }
        .event-meta { font-size: 13px; color: #718096; }
        .event-desc { font-size: 13px; color: #4a5568; line-height: 1.5; }
        .tag-row { display: flex; gap: 6px; flex-wrap: wrap; }
        .tag {
            background: #ebf8ff;
            color: #2c5282;
            border-radius: 4px;
            padding: 2px 8px;
            font-size: 11px;
            font-weight: 500;
            cursor: pointer;
        }
        .card-actions { display: flex; gap: 8px; margin-top: 8px; }
        .empty-state {
            text-align: center;
            padding: 64px 24px;
            background: white;
            border-radius: 8px;
            border: 1px solid #e2e8f0;
            color: #718096;
        }
        .modal-backdrop {
            position: fixed;
            inset: 0;
            background: rgba(26,32,44,0.5);
            display: none;
            align-items: center;
            justify-content: center;
        }
        .modal-backdrop.open { display: flex; }
        .modal {
            background: white;
            border-radius: 8px;
            padding: 24px;
            width: 480px;
            max-width: 92vw;
        }
        .modal h2 { font-size: 18px; color: #2d3748; margin-bottom: 16px; }
        .field { margin-bottom: 14px; display: flex; flex-direction: column; gap: 4px; }
        .field label { font-size: 13px; color: #4a5568; font-weight: 500; }
        .field-error { color: #c53030; font-size: 12px; min-height: 14px; }
        .modal-actions { display: flex; justify-content: flex-end; gap: 8px; margin-top: 8px; }
        .toast {
            position: fixed;
            bottom: 24px;
            right: 24px;
            background: #2d3748;
            color: white;
            padding: 12px 20px;
            border-radius: 8px;
            font-size: 14px;
            box-shadow: 0 4px 12px rgba(0,0,0,0.2);
            display: none;
        }
        .toast.error { background: #c53030; }
        .loading { text-align: center; padding: 48px; color: #718096; }
    </style>
</head>
<body>
    <div class="container">
        <header>
            <div>
                <h1>Eventory</h1>
                <p class="subtitle">Your events, searchable and sorted</p>
            </div>
            <div class="user-box" id="user-box" style="display:none">
                <span class="user-name" id="user-name"></span>
                <button onclick="logout()">Log out</button>
            </div>
        </header>

        <div class="auth-panel" id="auth-panel">
            <div id="login-form">
                <h2>Log in</h2>
                <div class="field">
                    <label>Username</label>
                    <input id="login-username" autocomplete="username">
                </div>
                <div class="field">
                    <label>Password</label>
                    <input id="login-password" type="password" autocomplete="current-password">
                </div>
                <button class="primary" onclick="login()">Log in</button>
                <p class="auth-toggle">No account yet? <a onclick="toggleAuth(true)">Register</a></p>
            </div>
            <div id="register-form" style="display:none">
                <h2>Register</h2>
                <div class="field">
                    <label>Username</label>
                    <input id="reg-username">
                    <div class="field-error" data-field="username"></div>
                </div>
                <div class="field">
                    <label>Email</label>
                    <input id="reg-email" type="email">
                    <div class="field-error" data-field="email"></div>
                </div>
                <div class="field">
                    <label>Password</label>
                    <input id="reg-password" type="password">
                    <div class="field-error" data-field="password"></div>
                </div>
                <button class="primary" onclick="register()">Create account</button>
                <p class="auth-toggle">Already registered? <a onclick="toggleAuth(false)">Log in</a></p>
            </div>
        </div>

        <div id="app" style="display:none">
            <div class="stats-bar">
                <div class="stat-card">
                    <div class="stat-value" id="stat-total">0</div>
                    <div class="stat-label">Events</div>
                </div>
                <div class="stat-card">
                    <div class="stat-value" id="stat-tags">0</div>
                    <div class="stat-label">Unique tags</div>
                </div>
            </div>
            <div class="toolbar">
                <input name="search" id="search" placeholder="Search name, location, description" oninput="debouncedLoad()">
                <input id="tag-filter" placeholder="Tag" size="10" oninput="debouncedLoad()">
                <select id="sort-by" onchange="loadEvents()">
                    <option value="date" selected>Date</option>
                    <option value="name">Name</option>
                    <option value="location">Location</option>
                    <option value="created_at">Created</option>
                    <option value="updated_at">Updated</option>
                </select>
                <select id="sort-order" onchange="loadEvents()">
                    <option value="asc" selected>Ascending</option>
                    <option value="desc">Descending</option>
                </select>
                <button class="primary" onclick="openModal()">New Event</button>
            </div>
            <div id="loading" class="loading" style="display:none">Loading events...</div>
            <div class="cards" id="cards"></div>
            <div class="empty-state" id="empty-state" style="display:none">No events match. Create one!</div>
        </div>
    </div>

    <div class="modal-backdrop" id="modal-backdrop">
        <div class="modal">
            <h2 id="modal-title">New Event</h2>
            <div class="field">
                <label>Name</label>
                <input id="ev-name">
                <div class="field-error" data-field="name"></div>
            </div>
            <div class="field">
                <label>Date</label>
                <input id="ev-date" type="datetime-local">
                <div class="field-error" data-field="date"></div>
            </div>
            <div class="field">
                <label>Location</label>
                <input id="ev-location">
                <div class="field-error" data-field="location"></div>
            </div>
            <div class="field">
                <label>Description</label>
                <textarea id="ev-description" rows="3"></textarea>
                <div class="field-error" data-field="description"></div>
            </div>
            <div class="field">
                <label>Tags (comma separated)</label>
                <input id="ev-tags" placeholder="music, outdoors">
            </div>
            <div class="modal-actions">
                <button onclick="closeModal()">Cancel</button>
                <button class="primary" id="modal-save" onclick="saveEvent()">Save</button>
            </div>
        </div>
    </div>

    <div class="toast" id="toast"></div>

    <script>
        const TOKEN_KEY = 'eventory_token';
        let editingId = null;
        let debounceTimer = null;

        function token() { return localStorage.getItem(TOKEN_KEY); }

        async function api(path, options = {}) {
            options.headers = Object.assign(
                { 'Content-Type': 'application/json' },
                token() ? { 'Authorization': 'Bearer ' + token() } : {},
                options.headers || {}
            );
            const response = await fetch(path, options);
            const body = await response.json().catch(() => ({}));
            if (response.status === 401) {
                localStorage.removeItem(TOKEN_KEY);
                showAuth();
            }
            return { ok: response.ok, status: response.status, body };
        }

        function showToast(message, isError) {
            const toast = document.getElementById('toast');
            toast.textContent = message;
            toast.className = isError ? 'toast error' : 'toast';
            toast.style.display = 'block';
            setTimeout(() => { toast.style.display = 'none'; }, 3000);
        }

        function clearFieldErrors() {
            document.querySelectorAll('.field-error').forEach(el => el.textContent = '');
        }

        function applyFieldErrors(body) {
            const details = body.error && body.error.details;
            if (Array.isArray(details)) {
                for (const item of details) {
                    const slot = document.querySelector(`.field-error[data-field="${item.field}"]`);
                    if (slot) slot.textContent = item.message;
                }
                return true;
            }
            return false;
        }

        function toggleAuth(showRegister) {
            document.getElementById('login-form').style.display = showRegister ? 'none' : 'block';
            document.getElementById('register-form').style.display = showRegister ? 'block' : 'none';
            clearFieldErrors();
        }

        function showAuth() {
            document.getElementById('auth-panel').style.display = 'block';
            document.getElementById('app').style.display = 'none';
            document.getElementById('user-box').style.display = 'none';
        }

        function showApp(user) {
            document.getElementById('auth-panel').style.display = 'none';
            document.getElementById('app').style.display = 'block';
            document.getElementById('user-box').style.display = 'flex';
            document.getElementById('user-name').textContent = user.username;
            loadEvents();
            loadStats();
        }

        async function checkSession() {
            if (!token()) { showAuth(); return; }
            const { ok, body } = await api('/api/auth/me');
            if (ok) showApp(body.data); else showAuth();
        }

        async function register() {
            clearFieldErrors();
            const { ok, body } = await api('/api/auth/register', {
                method: 'POST',
                body: JSON.stringify({
                    username: document.getElementById('reg-username').value,
                    email: document.getElementById('reg-email').value,
                    password: document.getElementById('reg-password').value,
                }),
            });
            if (ok) {
                localStorage.setItem(TOKEN_KEY, body.data.token);
                showToast(body.message);
                showApp(body.data.user);
            } else if (!applyFieldErrors(body)) {
                showToast(body.error ? body.error.message : 'Registration failed', true);
            }
        }

        async function login() {
            const { ok, body } = await api('/api/auth/login', {
                method: 'POST',
                body: JSON.stringify({
                    username: document.getElementById('login-username').value,
                    password: document.getElementById('login-password').value,
                }),
            });
            if (ok) {
                localStorage.setItem(TOKEN_KEY, body.data.token);
                showApp(body.data.user);
            } else {
                showToast(body.error ? body.error.message : 'Login failed', true);
            }
        }

        function logout() {
            localStorage.removeItem(TOKEN_KEY);
            showAuth();
        }

        function debouncedLoad() {
            clearTimeout(debounceTimer);
            debounceTimer = setTimeout(loadEvents, 250);
        }

        async function loadEvents() {
            const loading = document.getElementById('loading');
            loading.style.display = 'block';

            const params = new URLSearchParams();
            const search = document.getElementById('search').value.trim();
            const tag = document.getElementById('tag-filter').value.trim();
            if (search) params.set('search', search);
            if (tag) params.set('tag', tag);
            params.set('sort_by', document.getElementById('sort-by').value);
            params.set('sort_order', document.getElementById('sort-order').value);

            const { ok, body } = await api('/api/events?' + params.toString());
            loading.style.display = 'none';
            if (!ok) {
                showToast('Failed to load events', true);
                return;
            }
            renderCards(body.data.events);
        }

        async function loadStats() {
            const { ok, body } = await api('/api/stats');
            if (ok) {
                document.getElementById('stat-total').textContent = body.data.total_events;
                document.getElementById('stat-tags').textContent = body.data.unique_tags;
            }
        }

        function escapeHtml(text) {
            const div = document.createElement('div');
            div.textContent = text == null ? '' : text;
            return div.innerHTML;
        }

        function formatDate(raw) {
            const parsed = new Date(raw);
            if (isNaN(parsed.getTime())) return raw;
            return raw.includes('T')
                ? parsed.toLocaleString(undefined, { dateStyle: 'long', timeStyle: 'short' })
                : parsed.toLocaleDateString(undefined, { dateStyle: 'long' });
        }

        function renderCards(events) {
            const cards = document.getElementById('cards');
            const empty = document.getElementById('empty-state');
            cards.innerHTML = '';
            empty.style.display = events.length === 0 ? 'block' : 'none';

            for (const event of events) {
                const card = document.createElement('div');
                card.className = 'event-card';
                const tags = (event.tags || []).map(tag =>
                    `<span class="tag" onclick="filterByTag('${escapeHtml(tag)}')">${escapeHtml(tag)}</span>`
                ).join('');
                card.innerHTML = `
                    <div class="event-name">${escapeHtml(event.name)}</div>
                    <div class="event-meta">${formatDate(event.date)} &middot; ${escapeHtml(event.location)}</div>
                    <div class="event-desc">${escapeHtml(event.description || '')}</div>
                    <div class="tag-row">${tags}</div>
                    <div class="card-actions">
                        <button onclick="openModal('${event.id}')">Edit</button>
                        <button class="danger" onclick="deleteEvent('${event.id}')">Delete</button>
                    </div>
                `;
                cards.appendChild(card);
            }
        }

        function filterByTag(tag) {
            document.getElementById('tag-filter').value = tag;
            loadEvents();
        }

        async function openModal(eventId) {
            clearFieldErrors();
            editingId = eventId || null;
            document.getElementById('modal-title').textContent = editingId ? 'Edit Event' : 'New Event';

            if (editingId) {
                const { ok, body } = await api('/api/events/' + editingId);
                if (!ok) { showToast('Failed to load event', true); return; }
                const event = body.data;
                document.getElementById('ev-name').value = event.name;
                document.getElementById('ev-date').value = event.date.slice(0, 16);
                document.getElementById('ev-location').value = event.location;
                document.getElementById('ev-description').value = event.description || '';
                document.getElementById('ev-tags').value = (event.tags || []).join(', ');
            } else {
                for (const id of ['ev-name', 'ev-date', 'ev-location', 'ev-description', 'ev-tags']) {
                    document.getElementById(id).value = '';
                }
            }
            document.getElementById('modal-backdrop').classList.add('open');
        }

        function closeModal() {
            document.getElementById('modal-backdrop').classList.remove('open');
        }

        async function saveEvent() {
            clearFieldErrors();
            const payload = {
                name: document.getElementById('ev-name').value,
                date: document.getElementById('ev-date').value,
                location: document.getElementById('ev-location').value,
                description: document.getElementById('ev-description').value,
                tags: document.getElementById('ev-tags').value,
            };
            const { ok, body } = await api(
                editingId ? '/api/events/' + editingId : '/api/events',
                { method: editingId ? 'PUT' : 'POST', body: JSON.stringify(payload) }
            );
            if (ok) {
                closeModal();
                showToast(body.message);
                loadEvents();
                loadStats();
            } else if (!applyFieldErrors(body)) {
                showToast(body.error ? body.error.message : 'Save failed', true);
            }
        }

        async function deleteEvent(eventId) {
            if (!confirm('Delete this event?')) return;
            const { ok, body } = await api('/api/events/' + eventId, { method: 'DELETE' });
            if (ok) {
                showToast(body.message);
                loadEvents();
                loadStats();
            } else {
                showToast('Delete failed', true);
            }
        }

        checkSession();
    </script>
</body>
</html>
"#;

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
